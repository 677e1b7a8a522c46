use super::PopupProps;
use crate::context::ClientEvent;
use crate::dom::js_error_message;
use psclient_core::popup::backgrounds::{Background, FAILED_UPLOAD, custom_background};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{FileReader, HtmlInputElement};
use yew::prelude::*;

#[derive(Debug, Error)]
enum UploadError {
    #[error("no file chosen")]
    NoFile,
    #[error("reading the file failed: {0}")]
    Read(String),
}

/// Read the first file of `input` as a data URL, reporting to `done`.
fn read_data_url(
    input: &HtmlInputElement,
    done: Callback<Result<String, UploadError>>,
) -> Result<(), UploadError> {
    let file = input
        .files()
        .and_then(|files| files.get(0))
        .ok_or(UploadError::NoFile)?;
    let reader = FileReader::new().map_err(|err| UploadError::Read(js_error_message(&err)))?;

    let on_load = {
        let reader = reader.clone();
        let done = done.clone();
        Closure::once_into_js(move || {
            let result = reader
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .ok_or_else(|| UploadError::Read("result is not a data URL".to_string()));
            done.emit(result);
        })
    };
    let on_error = Closure::once_into_js(move || {
        done.emit(Err(UploadError::Read("the browser could not read the file".to_string())));
    });
    reader.set_onload(Some(on_load.unchecked_ref()));
    reader.set_onerror(Some(on_error.unchecked_ref()));
    reader
        .read_as_data_url(&file)
        .map_err(|err| UploadError::Read(js_error_message(&err)))
}

#[function_component(BackgroundsPopup)]
pub fn backgrounds_popup(p: &PopupProps) -> Html {
    let status = use_state(|| None::<&'static str>);
    let file_ref = use_node_ref();

    let choose = |value: &'static str| {
        let ctx = p.ctx.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let background = Background::choose(value, &mut rand::thread_rng());
            log::debug!("background set to {}", background.id());
            ctx.emit(ClientEvent::SetBackground(background.setting()));
            ctx.close();
        })
    };

    let on_loaded = {
        let ctx = p.ctx.clone();
        let status = status.clone();
        Callback::from(move |result: Result<String, UploadError>| match result {
            Ok(data_url) => {
                ctx.emit(ClientEvent::SetBackground(custom_background(&data_url)));
                ctx.close();
            }
            Err(err) => {
                log::warn!("background upload: {err}");
                status.set(Some(FAILED_UPLOAD));
            }
        })
    };
    let on_done = {
        let ctx = p.ctx.clone();
        let file_ref = file_ref.clone();
        let status = status.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(input) = file_ref.cast::<HtmlInputElement>() else {
                ctx.close();
                return;
            };
            match read_data_url(&input, on_loaded.clone()) {
                Ok(()) => {}
                Err(UploadError::NoFile) => ctx.close(),
                Err(err) => {
                    log::warn!("background upload: {err}");
                    status.set(Some(FAILED_UPLOAD));
                }
            }
        })
    };

    let official = Background::OFFICIAL.into_iter().map(|background| {
        html! {
            <button class="option" value={background.id()} onclick={choose(background.id())}>
                <span class="bg" style={background.swatch_style()}></span>
                { format!(" {}", background.label()) }
            </button>
        }
    });

    html! {
        <div class="pad">
            <p><strong>{"Default"}</strong></p>
            <div class="bglist">
                <button class="option cur" value="" onclick={choose("")}>
                    <strong style="background: #888888; color: white; padding: 16px 18px; display: block; font-size: 12pt">
                        {"Random"}
                    </strong>
                </button>
            </div>
            <div style="clear: left"></div>
            <p><strong>{"Official"}</strong></p>
            <div class="bglist">{ for official }</div>
            <div style="clear: left"></div>
            <p><strong>{"Custom"}</strong></p>
            <p>{"Drag and drop an image to PS (the background settings don't need to be open), or upload:"}</p>
            <p><input type="file" accept="image/*" name="bgfile" ref={file_ref} /></p>
            <p class="bgstatus">{ (*status).unwrap_or_default() }</p>
            <p><button class="button" onclick={on_done}><strong>{"Done"}</strong></button></p>
        </div>
    }
}
