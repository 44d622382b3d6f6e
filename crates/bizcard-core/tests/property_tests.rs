//! Property-based tests for card artifacts
//!
//! Uses proptest to check that generated vCards and QR codes follow the
//! profile they were built from, and that the QR code actually scans.

use proptest::prelude::*;
use bizcard_core::profile::split_business;
use bizcard_core::{
    document_filename, vcard_filename, ArtifactGenerator, CardProfile, CardStore, CodePattern,
    ProfileEdit,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Names with at least one visible character.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z .'-]{0,40}").expect("valid regex")
}

fn phone_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("\\+?[0-9 ()-]{0,20}").expect("valid regex")
}

fn website_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("(https://)?[a-z0-9-]{1,30}\\.(com|org|io)(/[a-z]{0,10})?")
        .expect("valid regex")
}

/// Comma separated list with irregular spacing and empty segments.
fn business_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex(" {0,3}[A-Za-z0-9&]{0,12}( [A-Za-z]{1,8})? {0,3}")
            .expect("valid regex"),
        0..6,
    )
    .prop_map(|parts| parts.join(","))
}

fn profile_strategy() -> impl Strategy<Value = CardProfile> {
    (name_strategy(), phone_strategy(), website_strategy(), business_strategy()).prop_map(
        |(name, phone, website, business)| CardProfile {
            name,
            phone,
            website,
            business,
            ..Default::default()
        },
    )
}

/// Scan a pattern the way a phone camera would: rasterize and decode.
fn scan(pattern: &CodePattern) -> String {
    let raster = pattern.to_luma(4, 4);
    let mut image =
        rqrr::PreparedImage::prepare_from_greyscale(raster.size, raster.size, |x, y| {
            raster.get(x, y)
        });
    let grids = image.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR grid");
    let (_meta, content) = grids[0].decode().expect("QR code should decode");
    content
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The same profile always produces the same vCard
    #[test]
    fn vcard_is_deterministic(profile in profile_strategy()) {
        let generator = ArtifactGenerator::default();
        let a = generator.generate(&profile).unwrap();
        let b = generator.generate(&profile).unwrap();
        prop_assert_eq!(a.vcard, b.vcard);
        prop_assert_eq!(a.code, b.code);
    }

    /// Every field is carried verbatim and the envelope is fixed
    #[test]
    fn vcard_carries_profile_fields(profile in profile_strategy()) {
        let artifacts = ArtifactGenerator::default().generate(&profile).unwrap();
        let vcard = &artifacts.vcard;

        let lines: Vec<&str> = vcard.as_str().split("\r\n").collect();
        prop_assert_eq!(lines[0], "BEGIN:VCARD");
        prop_assert_eq!(lines[1], "VERSION:3.0");
        prop_assert_eq!(lines[lines.len() - 2], "END:VCARD");
        prop_assert_eq!(vcard.property("FN"), Some(profile.name.as_str()));
        prop_assert_eq!(vcard.property("TEL"), Some(profile.phone.as_str()));
        prop_assert_eq!(vcard.property("URL"), Some(profile.website.as_str()));
        prop_assert_eq!(vcard.property("ORG"), Some(profile.business.as_str()));
    }

    /// Splitting then re-joining business names is stable
    #[test]
    fn business_canonicalization_is_idempotent(business in business_strategy()) {
        let segments = split_business(&business);
        let canonical = segments.join(", ");

        prop_assert_eq!(split_business(&canonical), segments.clone());
        for segment in &segments {
            prop_assert!(!segment.is_empty());
            prop_assert_eq!(segment.trim(), segment.as_str());
        }
    }

    /// Export filenames never carry path separators or spaces
    #[test]
    fn filenames_are_safe(name in ".{1,60}") {
        for filename in [vcard_filename(&name), document_filename(&name)] {
            prop_assert!(!filename.contains('/'));
            prop_assert!(!filename.contains('\\'));
            prop_assert!(!filename.contains(' '));
            prop_assert!(!filename.starts_with('.'));
        }
    }

    /// The store never exposes a half-applied edit sequence
    #[test]
    fn store_revision_counts_edits(names in prop::collection::vec(name_strategy(), 1..20)) {
        let store = CardStore::new(CardProfile::default());
        let start = store.revision();
        for name in &names {
            store.apply(ProfileEdit::Name(name.clone()));
        }
        prop_assert_eq!(store.revision(), start + names.len() as u64);
        prop_assert_eq!(&store.snapshot().name, names.last().unwrap());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Decoding the generated QR code yields the exact vCard bytes
    #[test]
    fn qr_code_scans_back_to_vcard(profile in profile_strategy()) {
        let artifacts = ArtifactGenerator::default().generate(&profile).unwrap();
        prop_assert_eq!(scan(&artifacts.code), artifacts.vcard.as_str());
    }
}

// ============================================================================
// Fixed Payload Tests
// ============================================================================

#[test]
fn test_long_payload_scans() {
    let profile = CardProfile {
        name: "Maximiliana Evangelina Worthington-Smythe".to_string(),
        phone: "+44 (0)20 7946 0958 ext. 12345".to_string(),
        website: "https://www.a-rather-long-company-domain-name.example.org/people/max".to_string(),
        business: "Worthington Holdings, Smythe & Partners Consulting, Evergreen Ventures Ltd, \
                   Northern Lights Trading Company"
            .to_string(),
        ..Default::default()
    };
    let artifacts = ArtifactGenerator::default().generate(&profile).unwrap();
    assert!(artifacts.vcard.as_bytes().len() > 200);
    assert_eq!(scan(&artifacts.code), artifacts.vcard.as_str());
}

#[test]
fn test_non_ascii_payload_scans() {
    let profile = CardProfile {
        name: "José Ñúñez Müller".to_string(),
        business: "Café Zürich, 東京商事".to_string(),
        ..Default::default()
    };
    let artifacts = ArtifactGenerator::default().generate(&profile).unwrap();
    assert_eq!(scan(&artifacts.code), artifacts.vcard.as_str());
}
