pub const CSS_VARIABLES: &str = r#"
:root {
  /* Typography */
  --font-body: "Noto Serif JP", "Hiragino Mincho ProN", "Yu Mincho", serif;
  --font-mono: ui-monospace, SFMono-Regular, Menlo, monospace;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-24: 96px;
  --space-32: 128px;

  /* Layout */
  --nav-height: 80px;
  --width-narrow: 768px;
  --width-text: 896px;
  --width-content: 1024px;
  --width-wide: 1152px;
  --width-gallery: 1280px;

  /* Tracking */
  --tracking-wide: 0.1em;
  --tracking-wider: 0.2em;
  --tracking-widest: 0.3em;

  /* Animation */
  --transition-fast: 150ms;
  --transition-slow: 500ms;
  --transition-image: 700ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
  --easing-spring: cubic-bezier(0.22, 1.4, 0.36, 1);
}

/* Colour themes, selected by data-theme on the site root */
[data-theme="dark"] {
  --background: #0a0a0a;
  --foreground: #f2f2f0;
  --muted: #1a1a1a;
  --border-subtle: rgba(242, 242, 240, 0.1);
  --border-strong: rgba(242, 242, 240, 0.3);
  --fade-to: rgba(10, 10, 10, 1);
  --fade-from: rgba(10, 10, 10, 0.1);
}

[data-theme="light"] {
  --background: #f5f4f0;
  --foreground: #0a0a0a;
  --muted: #e6e4de;
  --border-subtle: rgba(10, 10, 10, 0.1);
  --border-strong: rgba(10, 10, 10, 0.3);
  --fade-to: rgba(245, 244, 240, 1);
  --fade-from: rgba(245, 244, 240, 0.1);
}"#;
