use crate::workflow::display_score;
use data::Match;
use leptos::prelude::*;

#[component]
pub fn MatchCard(item: Match) -> impl IntoView {
    let score_label = format!("{}%", display_score(item.score));
    let bar_style = format!(
        "width: {}%; height: 100%; background-color: #8b5cf6;",
        item.score * 100.0
    );
    let image_url = item.image_url;

    view! {
        <div style="
            border: 1px solid #3a3a42;
            border-radius: 8px;
            background-color: #1e1e22;
            overflow: hidden;
        ">
            <a href=image_url.clone() target="_blank" rel="noopener noreferrer" title="Open full image">
                <img
                    src=image_url.clone()
                    alt="Match"
                    style="
                        width: 100%;
                        aspect-ratio: 1 / 1;
                        object-fit: cover;
                        display: block;
                    "
                />
            </a>
            <div style="
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 0.5rem 0.75rem;
            ">
                <span style="font-size: 0.85rem; color: #9a9aa5;">"Similarity"</span>
                <span style="font-size: 1.1rem; font-weight: 700; color: #b49aff;">
                    {score_label}
                </span>
            </div>
            <div style="height: 4px; background-color: #3a3a42;">
                <div style=bar_style></div>
            </div>
        </div>
    }
}
