pub const BASE_COMPONENTS: &str = r#"
/* Navigation */
.site-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  height: var(--nav-height);
  padding: 0 var(--space-8);
  display: flex;
  justify-content: space-between;
  align-items: center;
  backdrop-filter: blur(4px);
}

.nav-logo {
  font-size: 1.5rem;
  font-weight: 300;
  letter-spacing: var(--tracking-widest);
  transition: opacity var(--transition-fast) var(--easing-standard);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  font-size: 0.875rem;
  letter-spacing: var(--tracking-wide);
  opacity: 0.5;
  transition: opacity var(--transition-fast) var(--easing-standard);
}

.nav-link.active {
  opacity: 1;
}

.nav-logo:hover,
.nav-link:hover {
  opacity: 0.7;
}

.nav-divider {
  width: 1px;
  height: var(--space-4);
  background-color: var(--foreground);
  opacity: 0.2;
}

/* Buttons */
.btn-ghost {
  background: none;
  border: none;
  color: inherit;
  cursor: pointer;
  opacity: 0.5;
  padding: var(--space-2) var(--space-3);
  font: inherit;
  font-size: 0.75rem;
  letter-spacing: var(--tracking-widest);
  transition: opacity var(--transition-fast) var(--easing-standard);
}

.btn-ghost:hover {
  opacity: 1;
}

.btn-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 36px;
  height: 36px;
  padding: 0;
}

.btn-icon svg {
  width: 16px;
  height: 16px;
}

.btn-solid {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border: none;
  cursor: pointer;
  font: inherit;
  letter-spacing: var(--tracking-widest);
  background-color: var(--foreground);
  color: var(--background);
  transition: opacity var(--transition-fast) var(--easing-standard);
}

.btn-solid:hover {
  opacity: 0.8;
}

/* Form controls */
.form-field {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.form-label {
  font-size: 0.875rem;
  letter-spacing: var(--tracking-widest);
  opacity: 0.7;
}

.form-input {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  font: inherit;
  color: inherit;
  background: transparent;
  border: 1px solid var(--border-subtle);
  outline: none;
  transition: border-color var(--transition-fast) var(--easing-standard);
}

.form-input:focus {
  border-color: var(--border-strong);
}

textarea.form-input {
  resize: none;
}

/* Toasts */
.toast-viewport {
  position: fixed;
  bottom: var(--space-8);
  right: var(--space-8);
  z-index: 100;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  max-width: 420px;
}

.toast {
  position: relative;
  padding: var(--space-4) var(--space-8) var(--space-4) var(--space-6);
  background-color: var(--background);
  border: 1px solid var(--border-strong);
  animation: enter-fade var(--transition-slow) var(--easing-standard) both;
}

.toast-title {
  font-size: 0.875rem;
  font-weight: 600;
  letter-spacing: var(--tracking-wide);
}

.toast-description {
  font-size: 0.875rem;
  opacity: 0.8;
  margin-top: var(--space-1);
}

.toast-close {
  position: absolute;
  top: var(--space-2);
  right: var(--space-2);
}

/* Cursor follower */
.cursor-ring,
.cursor-dot {
  position: fixed;
  top: 0;
  left: 0;
  z-index: 50;
  border-radius: 9999px;
  pointer-events: none;
  mix-blend-mode: difference;
}

.cursor-ring {
  width: 16px;
  height: 16px;
  border: 1px solid var(--foreground);
  transition: transform 120ms var(--easing-spring), opacity 200ms linear;
}

.cursor-dot {
  width: 4px;
  height: 4px;
  background-color: var(--foreground);
  transition: transform 60ms var(--easing-standard), opacity 200ms linear;
}

/* Footer */
.site-footer {
  position: relative;
  border-top: 1px solid var(--border-subtle);
  padding: var(--space-12) var(--space-8);
}

.site-footer-inner {
  margin: 0 auto;
  display: flex;
  justify-content: space-between;
  align-items: center;
  font-size: 0.75rem;
  letter-spacing: var(--tracking-widest);
  opacity: 0.5;
}
"#;
