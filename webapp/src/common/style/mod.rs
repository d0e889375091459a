use constcat::concat;

mod components;
mod pages;
mod variables;

pub use components::BASE_COMPONENTS;
pub use pages::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

// everything the site needs, in cascade order
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-body);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}

.site-root {
  min-height: 100vh;
  color: var(--foreground);
  background-color: var(--background);
  transition: background-color var(--transition-slow) var(--easing-standard),
              color var(--transition-slow) var(--easing-standard);
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    PAGE_STYLES
);
