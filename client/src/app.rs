use crate::config;
use crate::results_grid::ResultsGrid;
use crate::upload_form::UploadForm;
use crate::workflow::{
    resolve_error_response, resolve_ok_response, WorkflowState, EMPTY_MESSAGE, FALLBACK_ERROR,
};
use gloo_net::http::Request;
use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FormData};

async fn send_find_request(file: File) -> WorkflowState {
    let form = match FormData::new() {
        Ok(form) => form,
        Err(err) => {
            error!("Failed to build form data: {err:?}");
            return WorkflowState::Failed(FALLBACK_ERROR.to_string());
        }
    };
    if let Err(err) = form.append_with_blob_and_filename("file", &file, &file.name()) {
        error!("Failed to attach file to form data: {err:?}");
        return WorkflowState::Failed(FALLBACK_ERROR.to_string());
    }

    let request = match Request::post(&config::find_url()).body(form) {
        Ok(request) => request,
        Err(err) => {
            error!("Failed to build search request: {err:?}");
            return WorkflowState::Failed(FALLBACK_ERROR.to_string());
        }
    };

    match request.send().await {
        Ok(response) => {
            let body = response.text().await.unwrap_or_default();
            if response.ok() {
                resolve_ok_response(&body)
            } else {
                resolve_error_response(&body)
            }
        }
        Err(err) => {
            error!("Search request failed: {err:?}");
            WorkflowState::Failed(FALLBACK_ERROR.to_string())
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(WorkflowState::Idle);

    let perform_find = move |file: File| {
        if !state.with(WorkflowState::accepts_submit) {
            warn!("Search already in flight, ignoring submit");
            return;
        }
        state.set(WorkflowState::Searching);
        spawn_local(async move {
            state.set(send_find_request(file).await);
        });
    };

    let search_again = move |_| state.set(state.get().reset());

    view! {
        <main style="
            min-height: 100vh;
            background-color: #161618;
            color: white;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 1rem;
        ">
            <div style="width: 100%; max-width: 56rem;">
                <div style="
                    background-color: #1e1e22;
                    border: 1px solid #3a3a42;
                    border-radius: 16px;
                    padding: 3rem 2rem;
                ">
                    <div style="text-align: center; margin-bottom: 2rem;">
                        <h1 style="font-size: 2.5rem; margin: 0 0 1rem 0; color: #b49aff;">
                            "Find My Photos"
                        </h1>
                        <p style="color: #9a9aa5; font-size: 1.1rem; margin: 0;">
                            "Because you can't find your own face in a crowd."
                        </p>
                    </div>

                    {move || match state.get() {
                        WorkflowState::Idle => view! {
                            <UploadForm on_submit=perform_find />
                        }
                        .into_any(),
                        WorkflowState::Searching => view! {
                            <div style="text-align: center; padding: 3rem 0;">
                                <div class="spinner"></div>
                                <p style="color: #9a9aa5;">
                                    "Searching for your face... this might take a while."
                                </p>
                            </div>
                        }
                        .into_any(),
                        WorkflowState::Succeeded(matches) => {
                            let count = matches.len();
                            let plural = if count == 1 { "" } else { "s" };
                            view! {
                                <div>
                                    <div style="text-align: center; margin-bottom: 1.5rem;">
                                        <p style="color: #d5d5dc; font-size: 1.1rem;">
                                            {format!(
                                                "Found {count} photo{plural} with your face. Congratulations, you exist.",
                                            )}
                                        </p>
                                        <button
                                            on:click=search_again
                                            style="
                                                margin-top: 1rem;
                                                padding: 0.75rem 1.5rem;
                                                font-size: 1rem;
                                                border-radius: 8px;
                                                border: none;
                                                background-color: #3a3a42;
                                                color: white;
                                                cursor: pointer;
                                            "
                                        >
                                            "Search Again"
                                        </button>
                                    </div>
                                    <ResultsGrid matches=matches />
                                </div>
                            }
                            .into_any()
                        }
                        WorkflowState::Empty => view! {
                            <div style="text-align: center; padding: 2rem 0;">
                                <div style="
                                    border: 1px solid #7f3b3b;
                                    background-color: #2a1a1a;
                                    border-radius: 8px;
                                    padding: 1.5rem;
                                    margin-bottom: 1.5rem;
                                ">
                                    <p style="color: #f08a8a; font-size: 1.1rem; margin: 0;">
                                        {EMPTY_MESSAGE}
                                    </p>
                                </div>
                                <button
                                    on:click=search_again
                                    style="
                                        padding: 0.75rem 1.5rem;
                                        font-size: 1rem;
                                        border-radius: 8px;
                                        border: none;
                                        background-color: #8b5cf6;
                                        color: white;
                                        cursor: pointer;
                                    "
                                >
                                    "Try Again (If You Dare)"
                                </button>
                            </div>
                        }
                        .into_any(),
                        WorkflowState::Failed(message) => view! {
                            <div style="text-align: center; padding: 2rem 0;">
                                <div style="
                                    border: 1px solid #7f3b3b;
                                    background-color: #2a1a1a;
                                    border-radius: 8px;
                                    padding: 1.5rem;
                                    margin-bottom: 1.5rem;
                                ">
                                    <p style="color: #f08a8a; font-size: 1.1rem; margin: 0;">
                                        {message}
                                    </p>
                                </div>
                                <button
                                    on:click=search_again
                                    style="
                                        padding: 0.75rem 1.5rem;
                                        font-size: 1rem;
                                        border-radius: 8px;
                                        border: none;
                                        background-color: #8b5cf6;
                                        color: white;
                                        cursor: pointer;
                                    "
                                >
                                    "Try Again (If You Dare)"
                                </button>
                            </div>
                        }
                        .into_any(),
                    }}
                </div>

                <p style="text-align: center; color: #6a6a74; font-size: 0.85rem; margin-top: 1.5rem;">
                    "No guarantees this actually works. Built with minimal enthusiasm."
                </p>
            </div>
        </main>
    }
}
