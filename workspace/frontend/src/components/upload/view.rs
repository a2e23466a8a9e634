use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use super::form::{build_form_data, submit, CSV_ACCEPT};
use crate::api_client::upload::upload_file;
use crate::shared::toast::ToastContext;

const SUCCESS_MESSAGE: &str = "File uploaded successfully";

fn notify_success() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(SUCCESS_MESSAGE) {
            log::warn!("Could not show upload confirmation: {:?}", e);
        }
    }
}

#[function_component(DataUpload)]
pub fn data_upload() -> Html {
    let selected = use_state(|| None::<File>);
    let toast_ctx = use_context::<ToastContext>();

    let on_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let file = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            match &file {
                Some(file) => log::debug!("Selected {} ({} bytes)", file.name(), file.size()),
                None => log::debug!("File selection cleared"),
            }
            selected.set(file);
        })
    };

    let on_upload = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            let toast_ctx = toast_ctx.clone();
            submit((*selected).clone(), move |field| {
                if field.is_empty() {
                    // Sent anyway: the server decides what an empty form means
                    log::warn!("Uploading with no file selected");
                    if let Some(toast) = &toast_ctx {
                        toast.show_warning("No file selected".to_string());
                    }
                }

                let form = match build_form_data(&field) {
                    Ok(form) => form,
                    Err(e) => {
                        log::error!("{}", e);
                        if let Some(toast) = &toast_ctx {
                            toast.show_error(e);
                        }
                        return;
                    }
                };

                wasm_bindgen_futures::spawn_local(async move {
                    match upload_file(form).await {
                        Ok(_) => notify_success(),
                        Err(e) => {
                            log::error!("Error uploading file: {}", e);
                            if let Some(toast) = &toast_ctx {
                                toast.show_error(format!("Upload failed: {}", e));
                            }
                        }
                    }
                });
            });
        })
    };

    html! {
        <div>
            <h2 class="card-title">{"Upload Data"}</h2>
            <div class="flex flex-wrap items-center gap-2 mt-2">
                <input
                    type="file"
                    accept={CSV_ACCEPT}
                    class="file-input file-input-bordered file-input-sm"
                    onchange={on_change}
                />
                <button class="btn btn-secondary btn-sm" onclick={on_upload}>{"Upload"}</button>
            </div>
        </div>
    }
}
