//! Static informational sections and the footer.

use yew::prelude::*;

/// (title, tag, note) per product area; the tag doubles as the icon glyph.
const FEATURES: [(&str, &str, &str); 7] = [
    ("Student Records", "SR", "Profiles, guardians, classes"),
    ("Attendance", "AT", "Daily and period logs"),
    ("Fees", "FE", "Invoices and collections"),
    ("Exams", "EX", "Schedules and marks entry"),
    ("Communication", "CM", "Notices and messages"),
    ("Reports", "RP", "Academic and fee reports"),
    ("Administration", "AD", "Roles, permissions, setup"),
];

const APPROACH_ITEMS: [&str; 3] = [
    "Education-first mindset",
    "Simple for teachers and staff",
    "Structured and secure school data",
];

const SUPPORT_CHANNELS: [(&str, &str); 3] = [
    ("Email", "erpserpvidya@gmail.com"),
    ("Phone", "+91-XXXXXXXXXX"),
    ("WhatsApp", "Message us for quick help"),
];

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    html! {
        <section id="features" class="card-section">
            <h2>{"What the system covers"}</h2>
            <p class="sub">{"Scope only. No fluff."}</p>
            <div class="feature-grid">
                { for FEATURES.iter().map(|(title, tag, note)| html! {
                    <div class="feature-card">
                        <div class="feature-icon" aria-hidden="true">{tag}</div>
                        <div class="feature-body">
                            <div class="feature-title">{title}</div>
                            <div class="feature-note">{note}</div>
                        </div>
                    </div>
                })}
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="card-section muted">
            <h2>{"Our approach"}</h2>
            <div class="grid">
                { for APPROACH_ITEMS.iter().map(|item| html! {
                    <div class="card">{item}</div>
                })}
            </div>
        </section>
    }
}

#[function_component(StatusSection)]
pub fn status_section() -> Html {
    html! {
        <section id="status" class="card-section">
            <h2>{"Product status"}</h2>
            <div class="status-card">
                <p>{"The system is currently in active development and being used by early schools."}</p>
                <p>{"Feedback-driven improvements are ongoing."}</p>
            </div>
        </section>
    }
}

#[function_component(SupportSection)]
pub fn support_section() -> Html {
    html! {
        <section id="support" class="card-section muted">
            <h2>{"Support channels"}</h2>
            <div class="contact-grid">
                { for SUPPORT_CHANNELS.iter().map(|(label, value)| html! {
                    <div class="contact-card">
                        <div class="label">{label}</div>
                        <div class="value">{value}</div>
                    </div>
                })}
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-brand">
                <div class="footer-title">{"SERP Vidya ERP"}</div>
                <p class="footer-text">{"Built for reliable school operations."}</p>
            </div>
            <div class="footer-links">
                <div class="footer-col">
                    <div class="footer-label">{"Explore"}</div>
                    <a href="#features">{"Features"}</a>
                    <a href="#about">{"About"}</a>
                    <a href="#support">{"Support"}</a>
                    <a href="#contact">{"Contact"}</a>
                </div>
                <div class="footer-col">
                    <div class="footer-label">{"Reach us at"}</div>
                    <a href="mailto:erpserpvidya@gmail.com">{"erpserpvidya@gmail.com"}</a>
                </div>
            </div>
        </footer>
    }
}
