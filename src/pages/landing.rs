use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::accordion::Accordion;
use crate::components::icons::{Icon, IconKind, WhatsAppIcon};
use crate::config;
use crate::content::{
    default_about_description, default_about_title, default_benefits, default_cta_text,
    default_faq_items, default_hero_subtitle, default_hero_title, default_services,
    default_stats, Benefit, FaqEntry, Service, Stat,
};
use crate::hooks::{reveal_class, stagger_style, use_in_view, use_parallax};
use crate::whatsapp;

/// Page configuration. Every field falls back to the firm's own copy, so the
/// page renders complete with no props at all.
#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    #[prop_or_else(default_hero_title)]
    pub hero_title: String,
    #[prop_or_else(default_hero_subtitle)]
    pub hero_subtitle: String,
    #[prop_or_else(default_cta_text)]
    pub cta_text: String,
    #[prop_or_else(default_benefits)]
    pub benefits: Vec<Benefit>,
    #[prop_or_else(default_about_title)]
    pub about_title: String,
    #[prop_or_else(default_about_description)]
    pub about_description: String,
    #[prop_or_else(default_services)]
    pub services: Vec<Service>,
    #[prop_or_else(default_stats)]
    pub stats: Vec<Stat>,
    #[prop_or_else(default_faq_items)]
    pub faq_items: Vec<FaqEntry>,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let page_ref = use_node_ref();
    let stats_ref = use_node_ref();

    // The page container drives every section except the stats strip, which
    // waits until a third of it is on screen.
    let in_view = use_in_view(page_ref.clone(), 0.1);
    let stats_in_view = use_in_view(stats_ref.clone(), 0.3);
    let (blob_up, blob_down) = use_parallax(page_ref.clone());

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_whatsapp = Callback::from(move |_: MouseEvent| whatsapp::open_contact_chat());

    html! {
        <div class="landing-page" ref={page_ref}>
            <header class="site-header">
                <div class="container">
                    <img
                        src={config::LOGO_URL}
                        alt="Borges & Musa - Advocacia Empresarial"
                        class="site-logo"
                    />
                </div>
            </header>

            <section class="hero">
                <div
                    class="hero-blob hero-blob-left"
                    style={format!("transform: translateY({blob_up}px)")}
                ></div>
                <div
                    class="hero-blob hero-blob-right"
                    style={format!("transform: translateY({blob_down}px)")}
                ></div>
                <div class="container">
                    <div class={classes!("hero-content", reveal_class(in_view))}>
                        <span class="hero-badge reveal-item" style={stagger_style(0)}>
                            {"Direito Empresarial"}
                        </span>
                        <h1 class="reveal-item" style={stagger_style(1)}>
                            { &props.hero_title }
                        </h1>
                        <p class="hero-subtitle reveal-item" style={stagger_style(2)}>
                            { &props.hero_subtitle }
                        </p>
                        <button
                            class="cta-button reveal-item"
                            style={stagger_style(3)}
                            onclick={on_whatsapp.clone()}
                        >
                            <WhatsAppIcon />
                            { &props.cta_text }
                        </button>
                    </div>
                </div>
            </section>

            <section class="section section-muted">
                <div class="container">
                    <div class={classes!("section-heading", reveal_class(in_view))}>
                        <h2 class="reveal-item" style={stagger_style(0)}>
                            {"Evite prejuízos com decisões inseguras"}
                        </h2>
                        <p class="section-subtitle reveal-item" style={stagger_style(1)}>
                            {"Atuamos com:"}
                        </p>
                    </div>
                    <div class={classes!("benefits-grid", reveal_class(in_view))}>
                        { for props.benefits.iter().enumerate().map(|(index, benefit)| html! {
                            <div class="benefit-card reveal-item" style={stagger_style(index)}>
                                <Icon kind={benefit.icon} class="benefit-icon" />
                                <span>{ &benefit.text }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class={classes!("about-content", reveal_class(in_view))}>
                        <h2 class="reveal-item" style={stagger_style(0)}>
                            { &props.about_title }
                        </h2>
                        <p class="about-text reveal-item" style={stagger_style(1)}>
                            { &props.about_description }
                        </p>
                    </div>
                </div>
            </section>

            <section class="section section-muted">
                <div class="container">
                    <div class={classes!("section-heading", reveal_class(in_view))}>
                        <h2 class="reveal-item" style={stagger_style(0)}>
                            {"Como ajudamos sua empresa"}
                        </h2>
                        <p class="section-subtitle reveal-item" style={stagger_style(1)}>
                            {"Soluções jurídicas sob medida para sua empresa"}
                        </p>
                    </div>
                    <div class={classes!("services-grid", reveal_class(in_view))}>
                        { for props.services.iter().enumerate().map(|(index, service)| html! {
                            <div class="service-card reveal-item" style={stagger_style(index)}>
                                <div class="service-icon-box">
                                    <Icon kind={service.icon} class="service-icon" />
                                </div>
                                <div>
                                    <h3>{ &service.title }</h3>
                                    <p>{ &service.description }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class={classes!("authority-content", reveal_class(in_view))}>
                        <h2 class="reveal-item" style={stagger_style(0)}>
                            {"Atuação estratégica. Atendimento personalizado."}
                        </h2>
                        <p class="authority-text reveal-item" style={stagger_style(1)}>
                            {"Nossos advogados atuam com dedicação, estratégia e foco em \
                              resultado, sempre respeitando as normas éticas da OAB."}
                        </p>
                        <blockquote class="reveal-item" style={stagger_style(2)}>
                            {"\"Nosso objetivo é que o empresário possa focar no crescimento \
                               do seu negócio, com tranquilidade e respaldo jurídico.\""}
                            <footer>{"— Borges & Musa"}</footer>
                        </blockquote>
                    </div>
                </div>
            </section>

            <section class="section section-muted" ref={stats_ref}>
                <div class="container">
                    <div class={classes!("stats-grid", reveal_class(stats_in_view))}>
                        { for props.stats.iter().enumerate().map(|(index, stat)| html! {
                            <div class="stat-card reveal-item" style={stagger_style(index)}>
                                <Icon kind={stat.icon} class="stat-icon" />
                                <div class="stat-value">{ &stat.value }</div>
                                <div class="stat-label">{ &stat.label }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class={classes!("cta-panel", reveal_class(in_view))}>
                        <h2 class="reveal-item" style={stagger_style(0)}>
                            {"Precisa de uma orientação jurídica agora?"}
                        </h2>
                        <p class="reveal-item" style={stagger_style(1)}>
                            {"Conte com uma equipe experiente e especializada em Direito \
                              Empresarial."}
                        </p>
                        <button
                            class="whatsapp-button reveal-item"
                            style={stagger_style(2)}
                            onclick={on_whatsapp}
                        >
                            <WhatsAppIcon class="whatsapp-glyph-lg" />
                            {"Clique abaixo e fale conosco pelo WhatsApp"}
                        </button>
                    </div>
                </div>
            </section>

            <section class="section section-muted">
                <div class="container">
                    <div class={classes!("faq-content", reveal_class(in_view))}>
                        <h2 class="faq-heading reveal-item" style={stagger_style(0)}>
                            {"Perguntas Frequentes"}
                        </h2>
                        <Accordion items={props.faq_items.clone()} />
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div class="container">
                    <div class="footer-location">
                        <Icon kind={IconKind::MapPin} class="footer-pin" />
                        <span>
                            {"Belo Horizonte – MG | OAB/MG [inserir número da oab aqui] | \
                              [inserir aqui o telefone de contato]"}
                        </span>
                    </div>
                    <p class="footer-firm">{"Borges & Musa – Advocacia Empresarial"}</p>
                    <p class="footer-specialties">
                        {"Especialistas em Direito Tributário e Trabalhista para Empresas"}
                    </p>
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    width: 100%;
                    background: #ffffff;
                    color: #1a202c;
                    font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
                    overflow-x: hidden;
                }

                .landing-page .container {
                    max-width: 1080px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                /* Header */
                .site-header {
                    padding: 1rem 0;
                    background: #1e3a5f;
                    border-bottom: 1px solid #16304f;
                }

                .site-header .container {
                    display: flex;
                    justify-content: center;
                }

                .site-logo {
                    height: 5rem;
                    object-fit: contain;
                }

                /* Entrance animation */
                .reveal .reveal-item {
                    opacity: 0;
                    transform: translateY(20px);
                }

                .reveal.visible .reveal-item {
                    opacity: 1;
                    transform: none;
                    animation: rise-in 0.6s ease-out backwards;
                }

                @keyframes rise-in {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: none;
                    }
                }

                /* Hero */
                .hero {
                    position: relative;
                    padding: 6rem 0;
                    overflow: hidden;
                }

                .hero-blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    pointer-events: none;
                }

                .hero-blob-left {
                    top: 5rem;
                    left: 2.5rem;
                    width: 16rem;
                    height: 16rem;
                    background: rgba(30, 58, 95, 0.05);
                }

                .hero-blob-right {
                    bottom: 5rem;
                    right: 2.5rem;
                    width: 20rem;
                    height: 20rem;
                    background: rgba(201, 162, 39, 0.05);
                }

                .hero-content {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                    text-align: center;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .hero-badge {
                    display: inline-block;
                    padding: 0.25rem 0.9rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 999px;
                    font-size: 0.85rem;
                    color: #1e3a5f;
                }

                .hero-content h1 {
                    margin: 0;
                    font-size: 3.2rem;
                    line-height: 1.1;
                    letter-spacing: -0.02em;
                    font-weight: 700;
                }

                .hero-subtitle {
                    margin: 0;
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: #5a6575;
                    max-width: 46rem;
                }

                /* Buttons */
                .cta-button,
                .whatsapp-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    border: none;
                    border-radius: 8px;
                    padding: 0.9rem 1.6rem;
                    font-size: 1rem;
                    font-weight: 600;
                    color: #ffffff;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .cta-button {
                    background: #1e3a5f;
                }

                .cta-button:hover {
                    background: #16304f;
                }

                .whatsapp-button {
                    background: #25d366;
                }

                .whatsapp-button:hover {
                    background: #1ebe5b;
                }

                .whatsapp-glyph {
                    width: 1rem;
                    height: 1rem;
                    filter: brightness(0) invert(1);
                }

                .whatsapp-glyph-lg {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                /* Sections */
                .section {
                    padding: 4rem 0;
                }

                .section-muted {
                    background: #f5f7fa;
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-heading h2 {
                    margin: 0 0 1rem;
                    font-size: 2.25rem;
                    font-weight: 700;
                }

                .section-subtitle {
                    margin: 0;
                    font-size: 1.25rem;
                    color: #5a6575;
                }

                /* Benefits */
                .benefits-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .benefit-card {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem;
                    background: #ffffff;
                    border-radius: 8px;
                    box-shadow: 0 1px 2px rgba(15, 30, 60, 0.06);
                }

                .benefit-icon {
                    width: 1.25rem;
                    height: 1.25rem;
                    flex-shrink: 0;
                    color: #1e3a5f;
                }

                /* About */
                .about-content {
                    text-align: center;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .about-content h2 {
                    margin: 0 0 1.5rem;
                    font-size: 2.25rem;
                }

                .about-text {
                    margin: 0;
                    font-size: 1.1rem;
                    line-height: 1.7;
                    color: #5a6575;
                }

                /* Services */
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }

                .service-card {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: #ffffff;
                    border-radius: 8px;
                    box-shadow: 0 1px 2px rgba(15, 30, 60, 0.06);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .reveal.visible .service-card:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 6px 16px rgba(15, 30, 60, 0.12);
                }

                .service-icon-box {
                    flex-shrink: 0;
                    padding: 0.75rem;
                    border-radius: 8px;
                    background: rgba(30, 58, 95, 0.1);
                    color: #1e3a5f;
                }

                .service-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    display: block;
                }

                .service-card h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 600;
                }

                .service-card p {
                    margin: 0;
                    color: #5a6575;
                    line-height: 1.6;
                }

                /* Authority */
                .authority-content {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .authority-content h2 {
                    margin: 0 0 1.5rem;
                    font-size: 2.25rem;
                }

                .authority-text {
                    margin: 0 0 1.5rem;
                    font-size: 1.1rem;
                    color: #5a6575;
                }

                .authority-content blockquote {
                    margin: 0;
                    padding-left: 1.5rem;
                    border-left: 4px solid #1e3a5f;
                    font-size: 1.25rem;
                    font-style: italic;
                    color: #1e3a5f;
                    text-align: left;
                }

                .authority-content blockquote footer {
                    margin-top: 0.5rem;
                    font-size: 0.9rem;
                    font-style: normal;
                    color: #5a6575;
                }

                /* Stats */
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .stat-card {
                    text-align: center;
                    padding: 1.5rem;
                    background: #ffffff;
                    border-radius: 8px;
                    box-shadow: 0 1px 2px rgba(15, 30, 60, 0.06);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .reveal.visible .stat-card:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 6px 16px rgba(15, 30, 60, 0.12);
                }

                .stat-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    margin: 0 auto 1rem;
                    color: #1e3a5f;
                }

                .stat-value {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #1e3a5f;
                    margin-bottom: 0.5rem;
                }

                .stat-label {
                    color: #5a6575;
                }

                /* CTA */
                .cta-panel {
                    background: #1e3a5f;
                    color: #ffffff;
                    padding: 2rem;
                    border-radius: 8px;
                    text-align: center;
                }

                .cta-panel h2 {
                    margin: 0 0 1rem;
                    font-size: 1.9rem;
                }

                .cta-panel p {
                    margin: 0 0 1.5rem;
                    font-size: 1.1rem;
                    opacity: 0.9;
                }

                /* FAQ */
                .faq-content {
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .faq-heading {
                    margin: 0 0 3rem;
                    font-size: 2.25rem;
                    text-align: center;
                }

                /* Footer */
                .site-footer {
                    padding: 2rem 0;
                    border-top: 1px solid #e2e8f0;
                    text-align: center;
                    color: #5a6575;
                }

                .footer-location {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                }

                .footer-pin {
                    width: 1rem;
                    height: 1rem;
                    flex-shrink: 0;
                }

                .footer-firm {
                    margin: 0 0 0.25rem;
                    font-weight: 600;
                    color: #1a202c;
                }

                .footer-specialties {
                    margin: 0;
                    font-size: 0.9rem;
                }

                @media (max-width: 1024px) {
                    .benefits-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .hero {
                        padding: 4rem 0;
                    }

                    .hero-content h1 {
                        font-size: 2.25rem;
                    }

                    .hero-subtitle {
                        font-size: 1.1rem;
                    }

                    .section-heading h2,
                    .about-content h2,
                    .authority-content h2,
                    .faq-heading {
                        font-size: 1.8rem;
                    }

                    .benefits-grid,
                    .services-grid,
                    .stats-grid {
                        grid-template-columns: 1fr;
                    }

                    .site-logo {
                        height: 4rem;
                    }

                    .footer-location {
                        flex-direction: column;
                        gap: 0.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
