//! Home Page
//!
//! Resume sections over the rotating background, with the name revealed by
//! the scramble effect.

use folio::home::{Section, SiteContent};
use folio::Route as Screen;
use leptos::*;

use crate::components::{BackgroundCarousel, Menu, ScrambleText, SectionLinks};
use crate::state::use_global_state;

#[component]
pub fn Home() -> impl IntoView {
    let state = use_global_state();
    let config = state.config.get_value();
    let content = state.content.get_value();

    view! {
        <div class="min-h-screen text-gray-100">
            <BackgroundCarousel
                images=content.background_images.clone()
                interval_ms=config.carousel.interval_ms
            />
            <Menu current=Screen::Home />

            <header class="min-h-[70vh] flex flex-col items-center justify-center text-center px-6">
                <h1 class="text-5xl md:text-7xl font-bold font-mono tracking-tight mb-6">
                    <ScrambleText
                        text=content.name.clone()
                        frame_ms=config.scramble.frame_ms
                        frames_per_char=config.scramble.frames_per_char
                        class="text-amber-400"
                    />
                </h1>
                <p class="text-xl text-gray-300 max-w-2xl">{content.tagline.clone()}</p>
            </header>

            <SectionLinks />

            <main class="max-w-5xl mx-auto px-6 py-12 space-y-20">
                <About content=content.clone() />
                <Experience content=content.clone() />
                <Education content=content.clone() />
                <Certifications content=content.clone() />
                <Skills content=content />
            </main>
        </div>
    }
}

/// Titled block the section nav scrolls to
#[component]
fn SectionBlock(section: Section, children: Children) -> impl IntoView {
    view! {
        <section id=section.anchor() class="scroll-mt-16">
            <h2 class="text-3xl font-bold text-amber-400 mb-8 border-b border-gray-700/60 pb-3">
                {section.label()}
            </h2>
            {children()}
        </section>
    }
}

const CARD_CLASS: &str = "bg-slate-900/70 backdrop-blur-sm border border-gray-700/60 rounded-xl p-6";

#[component]
fn About(content: SiteContent) -> impl IntoView {
    view! {
        <SectionBlock section=Section::About>
            <div class=CARD_CLASS>
                <p class="text-lg text-gray-200 leading-relaxed mb-4">{content.about}</p>
                {content
                    .background
                    .into_iter()
                    .map(|paragraph| view! { <p class="text-gray-400 leading-relaxed mb-3">{paragraph}</p> })
                    .collect_view()}
            </div>
        </SectionBlock>
    }
}

#[component]
fn Experience(content: SiteContent) -> impl IntoView {
    view! {
        <SectionBlock section=Section::Experience>
            <div class="space-y-6">
                {content
                    .experience
                    .into_iter()
                    .map(|job| view! {
                        <article class=CARD_CLASS>
                            <div class="flex flex-wrap justify-between gap-2 mb-3">
                                <div>
                                    <h3 class="text-xl font-semibold">{job.role}</h3>
                                    <p class="text-amber-300">{job.organization}</p>
                                </div>
                                <div class="text-right text-sm text-gray-400">
                                    <p>{job.period}</p>
                                    {job.location.map(|l| view! { <p>{l}</p> })}
                                </div>
                            </div>
                            <ul class="list-disc list-inside space-y-1 text-gray-300">
                                {job.highlights
                                    .into_iter()
                                    .map(|h| view! { <li>{h}</li> })
                                    .collect_view()}
                            </ul>
                        </article>
                    })
                    .collect_view()}
            </div>
        </SectionBlock>
    }
}

#[component]
fn Education(content: SiteContent) -> impl IntoView {
    view! {
        <SectionBlock section=Section::Education>
            <div class="grid md:grid-cols-2 gap-6">
                {content
                    .education
                    .into_iter()
                    .map(|school| view! {
                        <article class=CARD_CLASS>
                            <h3 class="text-xl font-semibold">{school.degree}</h3>
                            <p class="text-amber-300">{school.institution}</p>
                            <p class="text-sm text-gray-400 mb-3">{school.period}</p>
                            <ul class="space-y-1 text-gray-300 text-sm">
                                {school.details
                                    .into_iter()
                                    .map(|d| view! { <li>{d}</li> })
                                    .collect_view()}
                            </ul>
                        </article>
                    })
                    .collect_view()}
            </div>
        </SectionBlock>
    }
}

#[component]
fn Certifications(content: SiteContent) -> impl IntoView {
    view! {
        <SectionBlock section=Section::Certifications>
            <ul class="grid md:grid-cols-2 gap-4">
                {content
                    .certifications
                    .into_iter()
                    .map(|cert| view! {
                        <li class=CARD_CLASS>
                            <p class="font-semibold">{cert.name}</p>
                            <p class="text-sm text-gray-400">
                                {cert.issuer}
                                {cert.year.map(|y| format!(" · {}", y))}
                            </p>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </SectionBlock>
    }
}

#[component]
fn Skills(content: SiteContent) -> impl IntoView {
    view! {
        <SectionBlock section=Section::Skills>
            <div class="grid md:grid-cols-3 gap-6">
                {content
                    .skills
                    .into_iter()
                    .map(|group| view! {
                        <div class=CARD_CLASS>
                            <h3 class="text-lg font-semibold text-amber-300 mb-3">{group.name}</h3>
                            <div class="flex flex-wrap gap-2">
                                {group.skills
                                    .into_iter()
                                    .map(|s| view! {
                                        <span class="px-3 py-1 bg-slate-800 border border-gray-700 rounded-full text-sm">
                                            {s}
                                        </span>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </SectionBlock>
    }
}
