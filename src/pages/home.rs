//! The single marketing page: hero, informational sections, contact, footer.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::carousel::HeroCarousel;
use crate::components::contact::ContactSection;
use crate::components::sections::{AboutSection, FeaturesSection, Footer, StatusSection, SupportSection};

/// Adds the `visible` class to every card section scrolled into view.
/// Sections start translated and transparent; the class triggers the CSS
/// entrance transition exactly once per section.
fn reveal_sections(window: &web_sys::Window, document: &web_sys::Document) {
    let viewport_height = window.inner_height().unwrap().as_f64().unwrap();
    if let Ok(sections) = document.query_selector_all(".card-section") {
        for i in 0..sections.length() {
            if let Some(node) = sections.item(i) {
                if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                    if element.get_bounding_client_rect().top() < viewport_height - 80.0 {
                        let classes = element.class_name();
                        if !classes.contains("visible") {
                            element.set_class_name(&format!("{} visible", classes));
                        }
                    }
                }
            }
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // First pass covers whatever is already on screen at load.
            reveal_sections(&window, &document);

            let window_inner = window.clone();
            let scroll_callback = Closure::wrap(Box::new(move || {
                let document = window_inner.document().unwrap();
                reveal_sections(&window_inner, &document);
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        },
        (),
    );

    html! {
        <main>
            <style>
                {r#"
                .page {
                    min-height: 100vh;
                    background: #f7f8fb;
                    color: #1d2433;
                    font-family: system-ui, -apple-system, sans-serif;
                }
                main {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                    padding: 2rem clamp(1rem, 5vw, 4rem) 4rem;
                }
                .card-section {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .card-section.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .card-section h2 {
                    font-size: 1.6rem;
                    margin-bottom: 1rem;
                }
                .card-section.muted {
                    background: #eef1f7;
                    border-radius: 16px;
                    padding: 2rem;
                }
                .sub {
                    color: #5a6478;
                    margin-bottom: 1.25rem;
                }
                .hero {
                    display: grid;
                    grid-template-columns: 1.1fr 1fr;
                    gap: 2.5rem;
                    align-items: center;
                    padding: 3rem 0 1rem;
                }
                .eyebrow {
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                    font-size: 0.8rem;
                    color: #3558c0;
                    margin-bottom: 0.75rem;
                }
                .hero-title {
                    font-size: clamp(1.8rem, 4vw, 2.6rem);
                    line-height: 1.2;
                    margin-bottom: 1rem;
                }
                .lede {
                    color: #49536a;
                    max-width: 34rem;
                    margin-bottom: 1.5rem;
                }
                .hero-actions .primary {
                    display: inline-block;
                    background: #3558c0;
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 10px;
                    text-decoration: none;
                }
                .hero-tagline {
                    margin-top: 1.75rem;
                    font-weight: 600;
                    color: #3558c0;
                    clip-path: inset(0 0 0 0);
                    animation: tagline-reveal 1.6s ease-out 0.25s backwards;
                }
                @keyframes tagline-reveal {
                    from { clip-path: inset(0 100% 0 0); opacity: 0.6; }
                    to { clip-path: inset(0 0 0 0); opacity: 1; }
                }
                .carousel-duo {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .carousel-card {
                    background: #fff;
                    border-radius: 14px;
                    padding: 0.75rem;
                    box-shadow: 0 10px 30px rgba(29, 36, 51, 0.08);
                }
                .carousel-media {
                    aspect-ratio: 9 / 16;
                    border-radius: 10px;
                    overflow: hidden;
                    background: #eef1f7;
                }
                .carousel-media-img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.4rem;
                    padding-top: 0.6rem;
                }
                .dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #c7cedd;
                    cursor: pointer;
                }
                .dot.active {
                    background: #3558c0;
                }
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1rem;
                }
                .feature-card {
                    display: flex;
                    gap: 0.9rem;
                    background: #fff;
                    border-radius: 12px;
                    padding: 1rem;
                    box-shadow: 0 4px 16px rgba(29, 36, 51, 0.06);
                }
                .feature-icon {
                    flex: none;
                    width: 42px;
                    height: 42px;
                    display: grid;
                    place-items: center;
                    border-radius: 10px;
                    background: #e4eafb;
                    color: #3558c0;
                    font-weight: 700;
                    font-size: 0.85rem;
                }
                .feature-title {
                    font-weight: 600;
                }
                .feature-note {
                    color: #5a6478;
                    font-size: 0.9rem;
                }
                .grid, .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1rem;
                }
                .card, .contact-card, .status-card {
                    background: #fff;
                    border-radius: 12px;
                    padding: 1.25rem;
                    box-shadow: 0 4px 16px rgba(29, 36, 51, 0.06);
                }
                .contact-card .label {
                    font-weight: 600;
                    margin-bottom: 0.3rem;
                }
                .contact-card .value {
                    color: #49536a;
                }
                .contact-wrapper {
                    display: grid;
                    grid-template-columns: 1.4fr 1fr;
                    gap: 2rem;
                    align-items: start;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    background: #fff;
                    border-radius: 14px;
                    padding: 1.5rem;
                    box-shadow: 0 10px 30px rgba(29, 36, 51, 0.08);
                }
                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                    font-weight: 600;
                    font-size: 0.9rem;
                }
                .contact-form input, .contact-form textarea {
                    border: 1px solid #c7cedd;
                    border-radius: 8px;
                    padding: 0.65rem 0.8rem;
                    font: inherit;
                    font-weight: 400;
                }
                .contact-form button {
                    align-self: flex-start;
                    background: #3558c0;
                    color: #fff;
                    border: none;
                    border-radius: 10px;
                    padding: 0.7rem 1.6rem;
                    font: inherit;
                    cursor: pointer;
                }
                .contact-form button:disabled {
                    opacity: 0.6;
                    cursor: default;
                }
                .feedback {
                    border-radius: 8px;
                    padding: 0.65rem 0.9rem;
                    font-size: 0.9rem;
                }
                .feedback.success {
                    background: #e5f5eb;
                    color: #1c6b3c;
                }
                .feedback.error {
                    background: #fdeaea;
                    color: #a13232;
                }
                .note-card {
                    background: #eef1f7;
                    border-radius: 14px;
                    padding: 1.5rem;
                }
                .note-title {
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .note-meta {
                    color: #5a6478;
                    font-size: 0.85rem;
                    margin-top: 0.75rem;
                }
                .footer {
                    display: flex;
                    justify-content: space-between;
                    gap: 2rem;
                    flex-wrap: wrap;
                    border-top: 1px solid #dde2ec;
                    padding-top: 2rem;
                }
                .footer-title {
                    font-weight: 700;
                    margin-bottom: 0.4rem;
                }
                .footer-text {
                    color: #5a6478;
                }
                .footer-links {
                    display: flex;
                    gap: 3rem;
                }
                .footer-col {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }
                .footer-col a {
                    color: #3558c0;
                    text-decoration: none;
                }
                .footer-label {
                    font-weight: 600;
                }
                @media (max-width: 900px) {
                    .hero, .contact-wrapper {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>

            <section class="hero">
                <div class="hero-copy">
                    <p class="eyebrow">{"Reliable operations for schools"}</p>
                    <h1 class="hero-title">
                        {"A simple School ERP built for clear and reliable school management."}
                    </h1>
                    <p class="lede">
                        {"Clear scope, lean features, and a product that is in active use by early schools. No hype, just the essentials."}
                    </p>
                    <div class="hero-actions">
                        <a class="primary" href="#contact">{"Learn More"}</a>
                    </div>
                    <div class="hero-tagline">{"Digital learning possible with SERP"}</div>
                </div>
                <div class="hero-visual">
                    <HeroCarousel />
                </div>
            </section>

            <FeaturesSection />
            <AboutSection />
            <StatusSection />
            <SupportSection />
            <ContactSection />
            <Footer />
        </main>
    }
}
