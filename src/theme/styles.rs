//! Global CSS for the portfolio.
//!
//! The filter/skill/toast staggers are pure CSS transitions; components
//! only swap classes and set per-item transition delays inline.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --slate-deep: #0f172a;
  --slate-panel: #1e293b;
  --slate-border: #334155;

  /* Accent gradient */
  --accent-purple: #a855f7;
  --accent-blue: #2563eb;
  --accent-glow: rgba(168, 85, 247, 0.35);
  --accent-gradient: linear-gradient(135deg, #a855f7, #2563eb);

  /* Text */
  --text-primary: #f1f5f9;
  --text-secondary: rgba(241, 245, 249, 0.7);
  --text-muted: rgba(241, 245, 249, 0.5);

  /* Semantic */
  --success: #4ade80;
  --danger: #ef4444;
  --info: #60a5fa;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--slate-deep);
  color: var(--text-primary);
  line-height: 1.7;
  overflow: hidden;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

img {
  display: block;
  max-width: 100%;
}

/* === Page scroll container === */
.page {
  position: relative;
  height: 100vh;
  overflow-y: auto;
  outline: none;
}

.page.no-scroll {
  overflow: hidden;
}

/* === Navigation === */
.nav-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  height: 80px;
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.nav-header.scrolled {
  background: rgba(15, 23, 42, 0.9);
  backdrop-filter: blur(12px);
  box-shadow: 0 2px 24px rgba(0, 0, 0, 0.4);
}

.nav-inner {
  max-width: 1100px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  font-size: 1.25rem;
  font-weight: 700;
  background: var(--accent-gradient);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.nav-links {
  display: flex;
  gap: 0.5rem;
}

.nav-item {
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  color: var(--text-secondary);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.nav-item:hover {
  color: var(--text-primary);
}

.nav-item.active {
  color: var(--text-primary);
  background: var(--slate-panel);
}

.mobile-menu-btn {
  display: none;
  color: var(--text-primary);
  padding: 0.5rem;
}

/* === Mobile nav panel === */
.mobile-nav {
  position: fixed;
  top: 80px;
  left: 0;
  right: 0;
  z-index: 99;
  display: flex;
  flex-direction: column;
  background: rgba(15, 23, 42, 0.97);
  max-height: 0;
  opacity: 0;
  overflow: hidden;
  transition: max-height var(--transition-normal), opacity var(--transition-normal);
}

.mobile-nav.open {
  max-height: 20rem;
  opacity: 1;
}

.mobile-nav-item {
  padding: 1rem 1.5rem;
  text-align: left;
  color: var(--text-secondary);
  border-bottom: 1px solid var(--slate-border);
}

.mobile-nav-item.active {
  color: var(--text-primary);
  background: var(--slate-panel);
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .mobile-menu-btn { display: block; }
}

/* === Sections === */
.section {
  max-width: 1100px;
  margin: 0 auto;
  padding: 6rem 1.5rem;
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: 2.5rem;
  text-align: center;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  text-align: center;
}

.hero-backdrop {
  position: absolute;
  inset: -20% -10%;
  background:
    radial-gradient(40% 40% at 30% 30%, var(--accent-glow), transparent 70%),
    radial-gradient(35% 35% at 70% 60%, rgba(37, 99, 235, 0.3), transparent 70%);
  will-change: transform;
  pointer-events: none;
}

.hero-content {
  position: relative;
  padding: 0 1.5rem;
}

.hero-greeting {
  color: var(--text-secondary);
  letter-spacing: 0.2em;
  text-transform: uppercase;
  font-size: 0.875rem;
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 800;
  margin: 0.5rem 0;
  background: var(--accent-gradient);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.hero-tagline {
  min-height: 2rem;
  font-size: 1.25rem;
  color: var(--text-primary);
}

.typing-caret {
  display: inline-block;
  width: 2px;
  height: 1.2em;
  margin-left: 2px;
  vertical-align: text-bottom;
  background: var(--accent-purple);
  animation: caret-blink 1s step-end infinite;
}

@keyframes caret-blink {
  50% { opacity: 0; }
}

.hero-blurb {
  max-width: 32rem;
  margin: 1rem auto 2rem;
  color: var(--text-secondary);
}

.hero-actions {
  display: flex;
  gap: 1rem;
  justify-content: center;
}

/* === Buttons === */
.btn-primary, .btn-outline, .btn-ghost {
  padding: 0.75rem 1.75rem;
  border-radius: 0.5rem;
  font-weight: 600;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast), opacity var(--transition-fast);
}

.btn-primary {
  background: var(--accent-gradient);
  color: #fff;
}

.btn-primary:hover:not(:disabled) {
  transform: translateY(-2px);
  box-shadow: 0 8px 24px var(--accent-glow);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-outline {
  border: 1px solid var(--slate-border);
  color: var(--text-primary);
}

.btn-outline:hover {
  border-color: var(--accent-purple);
}

.btn-ghost {
  color: var(--text-secondary);
}

.btn-submit {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  align-self: flex-start;
}

.btn-spinner {
  width: 1em;
  height: 1em;
  border: 2px solid rgba(255, 255, 255, 0.4);
  border-top-color: #fff;
  border-radius: 50%;
  animation: spin 0.7s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  color: var(--text-secondary);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.icon-btn:hover {
  color: var(--text-primary);
  background: var(--slate-panel);
}

/* === About === */
.about-body {
  max-width: 44rem;
  margin: 0 auto;
  display: grid;
  gap: 1rem;
  color: var(--text-secondary);
}

.about-stats {
  display: flex;
  gap: 3rem;
  justify-content: center;
  margin-top: 3rem;
}

.stat {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.stat-value {
  font-size: 2rem;
  font-weight: 800;
  background: var(--accent-gradient);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.stat-label {
  color: var(--text-muted);
  font-size: 0.875rem;
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
  gap: 1.5rem 3rem;
  max-width: 52rem;
  margin: 0 auto;
}

.skill-head {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.375rem;
}

.skill-level {
  color: var(--text-muted);
}

.skill-track {
  height: 0.5rem;
  border-radius: 0.25rem;
  background: var(--slate-panel);
  overflow: hidden;
}

.skill-fill {
  height: 100%;
  border-radius: 0.25rem;
  background: var(--accent-gradient);
  transition: width 1s cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Portfolio === */
.filter-pills {
  display: flex;
  gap: 0.75rem;
  justify-content: center;
  margin-bottom: 2.5rem;
}

.pill {
  padding: 0.5rem 1.25rem;
  border-radius: 999px;
  border: 1px solid var(--slate-border);
  color: var(--text-secondary);
  transition: all var(--transition-fast);
}

.pill:hover {
  color: var(--text-primary);
}

.pill.selected {
  background: var(--accent-gradient);
  border-color: transparent;
  color: #fff;
}

.portfolio-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
  gap: 1.5rem;
}

.portfolio-card {
  position: relative;
  border-radius: 0.75rem;
  overflow: hidden;
  cursor: pointer;
  aspect-ratio: 4 / 3;
  background: var(--slate-panel);
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.portfolio-card.show {
  opacity: 1;
  transform: scale(1);
}

.portfolio-card.hide {
  opacity: 0;
  transform: scale(0.85);
  pointer-events: none;
}

.portfolio-card.gone {
  display: none;
}

.portfolio-cover {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.portfolio-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: 1.25rem;
  background: linear-gradient(to top, rgba(15, 23, 42, 0.95), transparent 60%);
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.portfolio-card:hover .portfolio-overlay {
  opacity: 1;
}

.portfolio-category {
  color: var(--text-muted);
  font-size: 0.8rem;
}

.portfolio-cta {
  margin-top: 0.5rem;
  color: var(--accent-purple);
  font-size: 0.875rem;
  font-weight: 600;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.7);
  padding: 2rem;
}

.modal-dialog {
  width: min(56rem, 100%);
  max-height: 85vh;
  display: flex;
  flex-direction: column;
  border-radius: 0.75rem;
  background: var(--slate-panel);
  border: 1px solid var(--slate-border);
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 1.5rem;
  border-bottom: 1px solid var(--slate-border);
}

.modal-title {
  font-size: 1.25rem;
}

.modal-body {
  padding: 1.5rem;
  overflow-y: auto;
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
  gap: 1rem;
}

.gallery-tile {
  border-radius: 0.5rem;
  overflow: hidden;
  background: var(--slate-deep);
}

.gallery-tile img {
  width: 100%;
  aspect-ratio: 4 / 3;
  object-fit: cover;
}

/* === Contact === */
.contact-layout {
  display: grid;
  grid-template-columns: 1fr 1.5fr;
  gap: 3rem;
}

@media (max-width: 768px) {
  .contact-layout { grid-template-columns: 1fr; }
}

.contact-pitch {
  color: var(--text-secondary);
  margin-bottom: 1.5rem;
}

.contact-row {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  width: 100%;
  padding: 1rem;
  margin-bottom: 0.75rem;
  border-radius: 0.5rem;
  background: var(--slate-panel);
  text-align: left;
  transition: background var(--transition-fast);
}

.contact-row:not(.static):hover {
  background: var(--slate-border);
}

.contact-row.static {
  cursor: default;
}

.contact-row-label {
  font-size: 0.8rem;
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.contact-row-value {
  color: var(--text-primary);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

@media (max-width: 768px) {
  .form-grid { grid-template-columns: 1fr; }
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
}

.input-label {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.input-field {
  padding: 0.75rem 1rem;
  border-radius: 0.5rem;
  border: 1px solid var(--slate-border);
  background: var(--slate-panel);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--accent-purple);
}

.input-field.invalid {
  border-color: var(--danger);
}

.field-error {
  color: var(--danger);
  font-size: 0.8rem;
}

/* === Toasts === */
.toast {
  position: fixed;
  right: 1rem;
  z-index: 300;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  min-width: 18rem;
  max-width: 24rem;
  padding: 0.875rem 1rem;
  border-radius: 0.5rem;
  background: var(--slate-panel);
  border-left: 3px solid var(--info);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
  transition: transform var(--transition-normal), opacity var(--transition-normal), top var(--transition-normal);
}

.toast-success { border-left-color: var(--success); }
.toast-success .toast-icon { color: var(--success); }
.toast-error { border-left-color: var(--danger); }
.toast-error .toast-icon { color: var(--danger); }
.toast-info .toast-icon { color: var(--info); }

.toast-enter {
  transform: translateX(120%);
}

.toast-shown {
  transform: translateX(0);
}

.toast-leave {
  transform: translateX(120%);
  opacity: 0;
}

.toast-message {
  flex: 1;
}

.toast-close {
  color: var(--text-muted);
  font-size: 1.1rem;
}

.toast-close:hover {
  color: var(--text-primary);
}

/* === Scroll to top === */
.scroll-top {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 150;
  background: var(--accent-gradient);
  color: #fff;
  opacity: 0;
  visibility: hidden;
  transform: translateY(1rem);
  transition: opacity var(--transition-normal), transform var(--transition-normal), visibility var(--transition-normal);
}

.scroll-top.shown {
  opacity: 1;
  visibility: visible;
  transform: translateY(0);
}

/* === Footer === */
.footer {
  padding: 2rem 1.5rem;
  text-align: center;
  color: var(--text-muted);
  border-top: 1px solid var(--slate-border);
}
"#;
