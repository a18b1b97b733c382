use crate::match_card::MatchCard;
use data::Match;
use leptos::prelude::*;

#[component]
pub fn ResultsGrid(matches: Vec<Match>) -> impl IntoView {
    view! {
        <div style="
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
            gap: 1rem;
            "
        >
            {matches
                .into_iter()
                .map(|item| view! { <MatchCard item /> })
                .collect_view()}
        </div>
    }
}
