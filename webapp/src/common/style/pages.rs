pub const PAGE_STYLES: &str = r#"
/* Entrance animations, played once on mount */
@keyframes enter-fade {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes enter-rise {
  from { opacity: 0; transform: translate3d(0, var(--enter-distance, 20px), 0); }
  to { opacity: 1; transform: translate3d(0, 0, 0); }
}

@keyframes enter-settle {
  from { opacity: 0; transform: scale(1.1); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes scroll-cue {
  0%, 100% { transform: translate3d(-50%, 0, 0); }
  50% { transform: translate3d(-50%, 10px, 0); }
}

.enter-fade { animation: enter-fade 1s var(--easing-standard) both; }
.enter-rise { animation: enter-rise 1s var(--easing-standard) both; }
.enter-settle { animation: enter-settle 1.5s var(--easing-standard) both; }
.site-nav { --enter-distance: -20px; animation: enter-rise 0.8s var(--easing-standard) both; }

/* Page shell */
.page {
  position: relative;
  min-height: 100vh;
}

.page-body {
  position: relative;
  padding: var(--space-32) var(--space-8) var(--space-24);
}

.page-column { margin: 0 auto; }
.width-narrow { max-width: var(--width-narrow); }
.width-text { max-width: var(--width-text); }
.width-content { max-width: var(--width-content); }
.width-wide { max-width: var(--width-wide); }
.width-gallery { max-width: var(--width-gallery); }

.page-title {
  font-size: clamp(3.75rem, 8vw, 6rem);
  font-weight: 300;
  letter-spacing: var(--tracking-widest);
  margin-bottom: var(--space-12);
}

.page-lead {
  font-size: 1.25rem;
  opacity: 0.7;
  letter-spacing: var(--tracking-wide);
  line-height: 2;
  max-width: var(--width-narrow);
  margin-bottom: var(--space-24);
}

/* Sections */
.screen {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-32) var(--space-8);
}

.screen-fixed {
  position: relative;
  height: 100vh;
  overflow: hidden;
}

.layer {
  position: absolute;
  inset: 0;
}

.layer-content {
  position: relative;
  z-index: 10;
  text-align: center;
}

.cover {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom, var(--fade-from), transparent, var(--fade-to));
}

.hero-title {
  font-size: clamp(3.75rem, 8vw, 6rem);
  font-weight: 300;
  letter-spacing: var(--tracking-widest);
  margin-bottom: var(--space-8);
}

.hero-subtitle {
  font-size: 1.25rem;
  letter-spacing: var(--tracking-widest);
  opacity: 0.7;
}

.scroll-cue {
  position: absolute;
  bottom: var(--space-12);
  left: 50%;
  width: 1px;
  height: var(--space-16);
  background-color: var(--foreground);
  opacity: 0.3;
  animation: scroll-cue 2s ease-in-out infinite;
}

.section-title {
  font-size: clamp(2.25rem, 6vw, 4.5rem);
  font-weight: 300;
  letter-spacing: var(--tracking-widest);
  line-height: 1.6;
}

.section-title.centered {
  text-align: center;
  margin-bottom: var(--space-24);
}

.prose {
  font-size: 1.125rem;
  opacity: 0.7;
  line-height: 2;
  letter-spacing: var(--tracking-wide);
}

.prose-strong { opacity: 0.8; font-size: 1.25rem; }

.stack > * + * { margin-top: var(--space-8); }
.stack-lg > * + * { margin-top: var(--space-12); }
.stack-xl > * + * { margin-top: var(--space-16); }
.gap-after { margin-bottom: var(--space-32); }
.centered { text-align: center; }

.grid-2,
.grid-3 {
  display: grid;
  gap: var(--space-16);
}

@media (min-width: 768px) {
  .grid-2 { grid-template-columns: repeat(2, 1fr); align-items: center; }
  .grid-3 { grid-template-columns: repeat(3, 1fr); }
}

@media (min-width: 1024px) {
  .grid-gallery { grid-template-columns: repeat(3, 1fr); }
}

/* Philosophy cards */
.pillar {
  text-align: center;
  padding: var(--space-8);
  border: 1px solid var(--border-subtle);
  transition: border-color var(--transition-slow) var(--easing-standard);
}

.pillar:hover { border-color: var(--border-strong); }
.pillar-glyph { font-size: 3.75rem; margin-bottom: var(--space-8); }
.pillar-title { font-size: 1.5rem; letter-spacing: var(--tracking-widest); margin-bottom: var(--space-6); }
.pillar-body { font-size: 0.875rem; opacity: 0.6; line-height: 2; }

/* Work cards */
.work-card { cursor: pointer; }

.work-frame {
  aspect-ratio: 3 / 4;
  overflow: hidden;
  background-color: var(--muted);
  margin-bottom: var(--space-6);
}

.work-frame img {
  transition: transform var(--transition-image) var(--easing-standard),
              opacity var(--transition-image) var(--easing-standard);
}

.work-card:hover .work-frame img {
  transform: scale(1.05);
  opacity: 0.8;
}

.work-id { font-size: 1.5rem; font-weight: 300; letter-spacing: var(--tracking-widest); }
.work-title { font-size: 1.125rem; opacity: 0.8; margin-top: var(--space-3); }
.work-meta { font-size: 0.875rem; opacity: 0.5; margin-top: var(--space-3); }
.work-description { font-size: 0.875rem; opacity: 0.7; line-height: 1.6; padding-top: var(--space-3); }

.work-cid {
  margin-top: var(--space-4);
  padding-top: var(--space-4);
  border-top: 1px solid var(--border-subtle);
  font-size: 0.75rem;
}

.work-cid-label { opacity: 0.4; letter-spacing: var(--tracking-wide); }
.work-cid-value { opacity: 0.6; font-family: var(--font-mono); word-break: break-all; padding-top: var(--space-1); }

/* Misc */
.mark { font-size: 6rem; margin-bottom: var(--space-8); }
.caption { font-size: 0.875rem; letter-spacing: var(--tracking-widest); opacity: 0.5; }
.statement { font-size: 1.875rem; font-weight: 300; letter-spacing: var(--tracking-wider); }
.banner { position: relative; height: 60vh; overflow: hidden; margin-bottom: var(--space-32); }
.backdrop { position: absolute; inset: 0; opacity: 0.1; }
.rule-top { margin-top: var(--space-32); padding-top: var(--space-16); border-top: 1px solid var(--border-subtle); }

.opacity-40 { opacity: 0.4; }
.opacity-50 { opacity: 0.5; }
.opacity-60 { opacity: 0.6; }
.opacity-80 { opacity: 0.8; }
.opacity-90 { opacity: 0.9; }
"#;
