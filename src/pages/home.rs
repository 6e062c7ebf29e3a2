//! The single portfolio page.
//!
//! Owns the scroll state. The page body is the scroll container
//! (`div#page`); its `onscroll` reads the live offset out of the webview,
//! and section tops are measured once after mount. Everything downstream
//! (navbar style, active link, parallax, skills reveal, scroll-to-top) is
//! derived from that offset through `vitrine_core::scroll`.

use dioxus::prelude::*;
use vitrine_core::scroll::{
    active_section, anchor_target, navbar_scrolled, section_revealed, SectionPos,
};

use crate::components::{
    About, ContactSection, GalleryModal, Hero, NavHeader, Portfolio, ScrollTopButton, Skills,
    ToastHost,
};
use crate::context::use_catalog;

const SECTION_IDS: [&str; 5] = ["home", "about", "skills", "portfolio", "contact"];

#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();
    let mut scroll_y = use_signal(|| 0.0f64);
    let mut sections: Signal<Vec<SectionPos>> = use_signal(Vec::new);
    let mut viewport = use_signal(|| 0.0f64);
    let mut open_project: Signal<Option<String>> = use_signal(|| None);
    let mut skills_seen = use_signal(|| false);

    // Section geometry is stable for the session (static content), so one
    // measurement after mount is enough.
    use_future(move || async move {
        if let Some((measured, vh)) = measure_sections().await {
            tracing::debug!(sections = measured.len(), viewport = vh, "measured page sections");
            sections.set(measured);
            viewport.set(vh);
        } else {
            tracing::warn!("could not measure page sections, nav highlighting disabled");
        }
    });

    let on_scroll = move |_| {
        spawn(async move {
            if let Some(y) = read_scroll_offset().await {
                scroll_y.set(y);
                // The skills reveal latches the first time the section is
                // half on screen.
                if !skills_seen() {
                    let revealed = sections
                        .read()
                        .iter()
                        .find(|s| s.id == "skills")
                        .map(|s| section_revealed(s, y, viewport()))
                        .unwrap_or(false);
                    if revealed {
                        skills_seen.set(true);
                    }
                }
            }
        });
    };

    let navigate = move |section_id: String| {
        let target = if section_id == "home" {
            0.0
        } else {
            sections
                .read()
                .iter()
                .find(|s| s.id == section_id)
                .map(|s| anchor_target(s.top))
                .unwrap_or(0.0)
        };
        smooth_scroll_to(target);
    };

    let y = scroll_y();
    let active = {
        let sections = sections.read();
        active_section(&sections, y).map(str::to_string)
    };
    // Unknown or stale project ids resolve to no modal at all.
    let open = open_project().and_then(|id| catalog.read().get(&id).cloned());
    let page_class = if open.is_some() { "page no-scroll" } else { "page" };

    rsx! {
        NavHeader {
            scrolled: navbar_scrolled(y),
            active: active,
            on_navigate: navigate,
        }

        div {
            id: "page",
            class: "{page_class}",
            tabindex: "0",
            onscroll: on_scroll,
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    open_project.set(None);
                }
            },

            main {
                Hero { scroll_y: y, on_navigate: navigate }
                About {}
                Skills { revealed: skills_seen() }
                Portfolio { on_open: move |id| open_project.set(Some(id)) }
                ContactSection {}
            }

            footer { class: "footer",
                p { "\u{00A9} 2025 Omar Nasser. All rights reserved." }
            }
        }

        if let Some(project) = open {
            GalleryModal {
                project: project,
                on_close: move |_| open_project.set(None),
            }
        }

        ScrollTopButton {
            scroll_y: y,
            on_click: move |_| smooth_scroll_to(0.0),
        }

        ToastHost {}
    }
}

/// Read the scroll container's current offset out of the webview.
async fn read_scroll_offset() -> Option<f64> {
    let value = dioxus::document::eval(
        "const page = document.getElementById('page'); return page ? page.scrollTop : 0;",
    )
    .await
    .ok()?;
    value.as_f64()
}

/// Measure every section's top and height inside the scroll container,
/// plus the viewport height. Returns `None` if the DOM is not ready.
async fn measure_sections() -> Option<(Vec<SectionPos>, f64)> {
    let ids = SECTION_IDS
        .iter()
        .map(|id| format!("'{id}'"))
        .collect::<Vec<_>>()
        .join(",");
    let script = format!(
        "const out = [];\n\
         for (const id of [{ids}]) {{\n\
             const el = document.getElementById(id);\n\
             if (el) out.push([id, el.offsetTop, el.clientHeight]);\n\
         }}\n\
         return [out, window.innerHeight];"
    );

    let value = dioxus::document::eval(&script).await.ok()?;
    let parts = value.as_array()?;
    let raw = parts.first()?.as_array()?;
    let vh = parts.get(1)?.as_f64()?;

    let mut measured = Vec::with_capacity(raw.len());
    for entry in raw {
        let entry = entry.as_array()?;
        measured.push(SectionPos {
            id: entry.first()?.as_str()?.to_string(),
            top: entry.get(1)?.as_f64()?,
            height: entry.get(2)?.as_f64()?,
        });
    }
    Some((measured, vh))
}

/// Smooth-scroll the page container to a vertical offset.
fn smooth_scroll_to(target: f64) {
    let script = format!(
        "const page = document.getElementById('page');\n\
         if (page) page.scrollTo({{ top: {target}, behavior: 'smooth' }});"
    );
    spawn(async move {
        if let Err(err) = dioxus::document::eval(&script).await {
            tracing::warn!(error = %err, "smooth scroll failed");
        }
    });
}
