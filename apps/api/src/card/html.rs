//! HTML presenter for the signature vibe card.
//!
//! Renders the card fragment and keeps the latest one in a shared slot for the
//! HTTP layer to serve. Later renders overwrite earlier ones.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::card::ports::PresentationAdapter;
use crate::vibe::descriptor::POPULATED_BODY;
use crate::vibe::{Placeholder, VibeDescriptor};

/// Element id the client wires its retake handler to.
pub const RETAKE_BUTTON_ID: &str = "retake-assessment-btn";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardView {
    Populated { descriptor: VibeDescriptor },
    Empty { placeholder: Placeholder },
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedCard {
    pub view: CardView,
    pub html: String,
    pub rendered_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct HtmlCardPresenter {
    latest: RwLock<Option<RenderedCard>>,
}

impl HtmlCardPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn latest(&self) -> Option<RenderedCard> {
        self.latest.read().await.clone()
    }

    async fn store(&self, view: CardView, html: String) {
        *self.latest.write().await = Some(RenderedCard {
            view,
            html,
            rendered_at: Utc::now(),
        });
    }
}

#[async_trait]
impl PresentationAdapter for HtmlCardPresenter {
    async fn show_populated(&self, descriptor: &VibeDescriptor) {
        let html = render_populated(descriptor);
        self.store(
            CardView::Populated {
                descriptor: descriptor.clone(),
            },
            html,
        )
        .await;
    }

    async fn show_empty(&self, placeholder: &Placeholder) {
        let html = render_empty(placeholder);
        self.store(
            CardView::Empty {
                placeholder: placeholder.clone(),
            },
            html,
        )
        .await;
    }
}

pub fn render_populated(descriptor: &VibeDescriptor) -> String {
    let mut html = String::new();
    html.push_str("<p class=\"prompt-tag\">Signature vibe</p>\n");
    html.push_str(&format!(
        "<h3>\"{}\"</h3>\n",
        escape_html(&descriptor.tagline)
    ));
    html.push_str(&format!(
        "<p class=\"vibe-description\">{POPULATED_BODY}</p>\n"
    ));
    html.push_str("<div class=\"profile-side-list\">\n");
    for t in &descriptor.traits {
        html.push_str(&format!(
            "  <span><i class=\"fas fa-{}\"></i> {}</span>\n",
            t.icon.as_str(),
            escape_html(&t.text)
        ));
    }
    html.push_str("</div>\n");
    html.push_str(&format!(
        "<button class=\"btn btn-secondary\" id=\"{RETAKE_BUTTON_ID}\"><i class=\"fas fa-refresh\"></i> Retake</button>\n"
    ));
    html
}

/// Placeholder view: heading and body only, no trait list or retake button.
pub fn render_empty(placeholder: &Placeholder) -> String {
    format!(
        "<p class=\"prompt-tag\">Signature vibe</p>\n\
         <h3 id=\"vibe-headline\">\"{}\"</h3>\n\
         <p id=\"vibe-description\">{}</p>\n",
        escape_html(&placeholder.tagline),
        escape_html(&placeholder.body)
    )
}

/// Replaces: & < > " '
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
