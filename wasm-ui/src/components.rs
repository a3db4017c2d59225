//! UI components for the gallery page.

use gif_gallery::{Gif, GifForm};
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn text_input(on_change: &Callback<String>) -> Callback<InputEvent> {
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let target: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(target.value());
    })
}

fn submit(on_submit: &Callback<()>) -> Callback<SubmitEvent> {
    let on_submit = on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
        // Keep the page from reloading.
        e.prevent_default();
        on_submit.emit(());
    })
}

/// Form for adding a new gif.
#[derive(Properties, PartialEq)]
pub struct CreateFormProps {
    pub form: GifForm,
    pub on_alt_text: Callback<String>,
    pub on_url: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(CreateForm)]
pub fn create_form(props: &CreateFormProps) -> Html {
    html! {
        <div class="panel create-panel">
            <div class="panel-header">
                <h2>{ "Add a Gif" }</h2>
            </div>
            <form id="create-form" class="panel-content" onsubmit={submit(&props.on_submit)}>
                <label for="altText">{ "Alt text" }</label>
                <input
                    id="altText"
                    type="text"
                    value={props.form.alt_text.clone()}
                    oninput={text_input(&props.on_alt_text)}
                />
                <label for="url">{ "URL" }</label>
                <input
                    id="url"
                    type="url"
                    value={props.form.url.clone()}
                    oninput={text_input(&props.on_url)}
                />
                <button type="submit" class="create-button">{ "Create" }</button>
            </form>
        </div>
    }
}

/// The rendered gifs. Clicking one selects it for editing.
#[derive(Properties, PartialEq)]
pub struct GifGridProps {
    pub gifs: Vec<Gif>,
    pub selected: Option<String>,
    pub on_select: Callback<Gif>,
}

#[function_component(GifGrid)]
pub fn gif_grid(props: &GifGridProps) -> Html {
    html! {
        <div class="container">
            { for props.gifs.iter().map(|gif| {
                let on_click = {
                    let on_select = props.on_select.clone();
                    let gif = gif.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(gif.clone()))
                };
                let class = if props.selected.as_deref() == Some(gif.id.as_str()) {
                    "gif selected"
                } else {
                    "gif"
                };
                html! {
                    <img
                        key={gif.id.as_str()}
                        class={class}
                        src={gif.url.clone()}
                        alt={gif.alt_text.clone()}
                        onclick={on_click}
                    />
                }
            })}
        </div>
    }
}

/// Form for editing or deleting the selected gif.
#[derive(Properties, PartialEq)]
pub struct EditFormProps {
    pub title: String,
    pub form: GifForm,
    pub on_alt_text: Callback<String>,
    pub on_url: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_delete: Callback<()>,
}

#[function_component(EditForm)]
pub fn edit_form(props: &EditFormProps) -> Html {
    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(()))
    };

    html! {
        <div class="panel edit-panel">
            <div class="panel-header">
                <h2 id="edit-title">{ &props.title }</h2>
            </div>
            <form id="edit-form" class="panel-content" onsubmit={submit(&props.on_submit)}>
                <label for="edit-altText">{ "Alt text" }</label>
                <input
                    id="edit-altText"
                    type="text"
                    value={props.form.alt_text.clone()}
                    oninput={text_input(&props.on_alt_text)}
                />
                <label for="edit-url">{ "URL" }</label>
                <input
                    id="edit-url"
                    type="url"
                    value={props.form.url.clone()}
                    oninput={text_input(&props.on_url)}
                />
                <div class="button-group">
                    <button type="submit" class="update-button">{ "Update" }</button>
                    <button id="delete-button" type="button" class="delete-button" onclick={on_delete_click}>
                        { "Delete" }
                    </button>
                </div>
            </form>
        </div>
    }
}
