use leptos::html::Input;
use leptos::prelude::*;
use log::error;
use web_sys::{File, Url};

/// Object URL for rendering the picked file before upload. Dropping the
/// handle revokes the URL, so replacing or clearing the selection can
/// never leak the underlying resource.
pub struct PreviewHandle {
    url: String,
}

impl PreviewHandle {
    pub fn create(file: &File) -> Option<Self> {
        match Url::create_object_url_with_blob(file) {
            Ok(url) => Some(Self { url }),
            Err(err) => {
                error!("Failed to create preview URL: {err:?}");
                None
            }
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}

struct SelectedImage {
    file: File,
    preview: PreviewHandle,
}

pub fn is_image_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

pub fn format_size_mb(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}

#[component]
pub fn UploadForm(on_submit: impl Fn(File) + 'static + Copy) -> impl IntoView {
    // `File` is a browser handle, not Send, so the selection lives in a
    // local-storage signal.
    let selected = RwSignal::new_local(None::<SelectedImage>);
    let input_ref = NodeRef::<Input>::new();

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if !is_image_type(&file.type_()) {
            let _ = window()
                .alert_with_message("That's not an image. Try again with an actual photo.");
            return;
        }
        let Some(preview) = PreviewHandle::create(&file) else {
            return;
        };
        // Replacing a previous selection drops it, revoking its preview URL.
        selected.set(Some(SelectedImage { file, preview }));
    };

    let on_confirm = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let file = selected.with(|sel| sel.as_ref().map(|image| image.file.clone()));
        match file {
            Some(file) => on_submit(file),
            None => {
                let _ = window().alert_with_message("You forgot to select a file. Predictable.");
            }
        }
    };

    let on_reset = move |_| {
        selected.set(None);
        // Clear the native input as well so the same file can be re-picked.
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
    };

    let has_selection = move || selected.with(|sel| sel.is_some());
    let preview_url = move || {
        selected.with(|sel| sel.as_ref().map(|image| image.preview.url().to_string()))
    };
    let file_name = move || selected.with(|sel| sel.as_ref().map(|image| image.file.name()));
    let file_size = move || {
        selected.with(|sel| sel.as_ref().map(|image| format_size_mb(image.file.size())))
    };

    view! {
        <form on:submit=on_confirm style="display: flex; flex-direction: column; gap: 1.5rem;">
            <input
                node_ref=input_ref
                id="file-upload"
                type="file"
                accept="image/*"
                style="display: none;"
                on:change=on_file_change
            />
            <label for="file-upload" style="display: block; cursor: pointer;">
                <div style="
                    border: 2px dashed #646472;
                    border-radius: 12px;
                    padding: 2rem;
                    text-align: center;
                    background-color: #1a1a1e;
                ">
                    <Show
                        when=has_selection
                        fallback=|| view! {
                            <p style="color: #9a9aa5; font-size: 1.1rem; margin: 0 0 0.5rem 0;">
                                "Click to upload your selfie"
                            </p>
                            <p style="color: #6a6a74; font-size: 0.85rem; margin: 0;">
                                "One photo. Your face. Don't overthink it."
                            </p>
                        }
                    >
                        <img
                            src=preview_url
                            alt="Preview"
                            style="
                                width: 12rem;
                                height: 12rem;
                                object-fit: cover;
                                border-radius: 8px;
                            "
                        />
                        <p style="color: #d5d5dc; font-weight: 500; margin: 0.75rem 0 0.25rem 0;">
                            {file_name}
                        </p>
                        <p style="color: #8a8a94; font-size: 0.85rem; margin: 0;">
                            {file_size}
                        </p>
                    </Show>
                </div>
            </label>

            <Show when=has_selection fallback=|| ()>
                <div style="display: flex; gap: 1rem;">
                    <button
                        type="submit"
                        style="
                            flex: 1;
                            padding: 1rem 1.5rem;
                            font-size: 1rem;
                            font-weight: 600;
                            border-radius: 8px;
                            border: none;
                            background-color: #8b5cf6;
                            color: white;
                            cursor: pointer;
                        "
                    >
                        "Search My Face"
                    </button>
                    <button
                        type="button"
                        on:click=on_reset
                        style="
                            padding: 1rem 1.5rem;
                            font-size: 1rem;
                            font-weight: 600;
                            border-radius: 8px;
                            border: none;
                            background-color: #3a3a42;
                            color: white;
                            cursor: pointer;
                        "
                    >
                        "Cancel"
                    </button>
                </div>
            </Show>
        </form>
    }
}
