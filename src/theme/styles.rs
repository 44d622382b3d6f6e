//! Global CSS styles for the desktop app.
//!
//! Palette variables come from `theme::css_variables()` and are emitted
//! ahead of this sheet.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: 'Helvetica Neue', Arial, sans-serif;
  background: radial-gradient(circle at top, #1f1f1f 0%, var(--ink) 70%);
  color: var(--ivory);
  min-height: 100vh;
  line-height: 1.5;
}

/* === App Shell === */
.app-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.app-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  border-bottom: 1px solid var(--ink-border);
}

.app-title {
  font-family: Georgia, serif;
  font-size: 1.5rem;
  letter-spacing: 0.1em;
  color: var(--gold);
}

.app-header__controls {
  display: flex;
  gap: 0.75rem;
}

.app-main {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  padding: 2rem;
}

/* === Business Card === */
.biz-card {
  background: linear-gradient(145deg, #151515, var(--ink));
  border: 2px solid var(--gold);
  border-radius: 18px;
  box-shadow: 0 0 40px var(--gold-glow);
  padding: 2rem;
  display: flex;
  gap: 1.5rem;
  transition: all 300ms ease;
}

.biz-card--vertical {
  flex-direction: column;
  align-items: center;
  text-align: center;
  width: 360px;
}

.biz-card--horizontal {
  flex-direction: row;
  align-items: center;
  width: 720px;
}

.biz-card__identity {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

.biz-card--horizontal .biz-card__identity {
  align-items: flex-start;
  flex: 1;
}

.biz-card__photo {
  width: 120px;
  height: 120px;
  border-radius: 50%;
  border: 3px solid var(--gold);
  object-fit: cover;
  background: var(--ink-raised);
}

.biz-card__initials {
  width: 120px;
  height: 120px;
  border-radius: 50%;
  border: 3px solid var(--gold);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2.5rem;
  color: var(--gold);
  background: var(--ink-raised);
}

.biz-card__name {
  font-family: Georgia, serif;
  font-size: 1.75rem;
  color: var(--gold-light);
}

.biz-card__title {
  font-style: italic;
  color: var(--text-muted);
}

.biz-card__businesses {
  list-style: none;
  color: var(--gold);
  font-weight: 600;
}

.biz-card__contact {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.biz-card__contact a {
  color: var(--ivory);
  text-decoration: none;
}

.biz-card__contact a:hover {
  color: var(--gold-light);
}

.biz-card__social {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.biz-card__social a {
  font-size: 0.8rem;
  padding: 0.2rem 0.6rem;
  border: 1px solid var(--gold);
  border-radius: 999px;
  color: var(--gold);
  text-decoration: none;
}

/* === QR Code === */
.code-display {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
}

.code-display__frame {
  width: 180px;
  padding: 8px;
  background: var(--gold);
  border-radius: 10px;
}

.code-display__frame svg {
  display: block;
  width: 100%;
  height: auto;
  border-radius: 4px;
}

.code-display__caption {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.code-display__error {
  width: 180px;
  padding: 1rem;
  border: 1px dashed var(--danger);
  border-radius: 10px;
  font-size: 0.8rem;
  color: var(--danger);
}

/* === Buttons === */
.btn-primary, .btn-outline, .btn-whatsapp, .btn-ghost {
  font: inherit;
  padding: 0.6rem 1.2rem;
  border-radius: 8px;
  cursor: pointer;
  transition: all 150ms ease;
}

.btn-primary {
  background: var(--gold);
  color: var(--ink);
  border: 1px solid var(--gold);
  font-weight: 600;
}

.btn-primary:hover:not(:disabled) {
  background: var(--gold-light);
  box-shadow: 0 0 12px var(--gold-glow);
}

.btn-outline {
  background: transparent;
  color: var(--gold);
  border: 1px solid var(--gold);
}

.btn-outline:hover:not(:disabled) {
  background: var(--gold-glow);
}

.btn-whatsapp {
  background: var(--whatsapp);
  color: #ffffff;
  border: 1px solid var(--whatsapp);
  font-weight: 600;
}

.btn-ghost {
  background: transparent;
  color: var(--text-muted);
  border: 1px solid transparent;
}

button:disabled {
  opacity: 0.5;
  cursor: wait;
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--ivory);
  font-size: 1.5rem;
  cursor: pointer;
}

.view-toggle {
  font: inherit;
  display: flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.6rem 1rem;
  background: var(--ink-raised);
  color: var(--ivory);
  border: 1px solid var(--ink-border);
  border-radius: 8px;
  cursor: pointer;
}

/* === Action Bar === */
.action-bar {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
}

.action-bar__hint {
  width: 100%;
  text-align: center;
  font-size: 0.75rem;
  color: var(--text-muted);
}

/* === Editor Modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.7);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 10;
}

.card-editor {
  width: min(560px, 92vw);
  max-height: 90vh;
  overflow-y: auto;
  background: var(--ink-raised);
  border: 1px solid var(--gold);
  border-radius: 14px;
  padding: 1.5rem;
}

.card-editor__header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1rem;
}

.card-editor__header h2 {
  font-family: Georgia, serif;
  color: var(--gold);
}

.card-editor__section {
  margin-top: 1.25rem;
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--text-muted);
}

.card-editor__footer {
  display: flex;
  justify-content: flex-end;
  margin-top: 1.5rem;
}

/* === Form Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
  margin-top: 0.75rem;
}

.input-label {
  font-size: 0.85rem;
  color: var(--gold-light);
}

.input-hint {
  color: var(--text-muted);
  font-size: 0.75rem;
}

.input-field {
  font: inherit;
  padding: 0.5rem 0.75rem;
  background: var(--ink);
  color: var(--ivory);
  border: 1px solid var(--ink-border);
  border-radius: 6px;
}

.input-field:focus {
  outline: none;
  border-color: var(--gold);
  box-shadow: 0 0 0 2px var(--gold-glow);
}

.input-field--invalid {
  border-color: var(--danger);
}

.input-error {
  font-size: 0.75rem;
  color: var(--danger);
}

/* === Photo Picker === */
.photo-picker {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-top: 0.75rem;
}

.photo-picker__preview {
  width: 64px;
  height: 64px;
  border-radius: 50%;
  border: 2px solid var(--gold);
  object-fit: cover;
}

.photo-picker__url {
  display: flex;
  gap: 0.5rem;
  flex: 1;
}

.photo-picker__url .form-field {
  flex: 1;
  margin-top: 0;
}

/* === Toasts === */
.toast-area {
  position: fixed;
  bottom: 1.5rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 20;
}

.toast {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  padding: 0.75rem 1.25rem;
  border-radius: 10px;
  color: #ffffff;
  box-shadow: 0 6px 24px rgba(0, 0, 0, 0.5);
  cursor: pointer;
  animation: toast-in 200ms ease;
}

.toast--success { background: var(--success); }
.toast--info { background: var(--info); }
.toast--error { background: var(--danger); }

@keyframes toast-in {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
