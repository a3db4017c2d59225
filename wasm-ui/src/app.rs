//! Main application component.

use std::rc::Rc;

use gif_gallery::{GalleryAction, GalleryState, Gallery, Gif, HttpGifApi, Result};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::{CreateForm, EditForm, GifGrid};

/// Reducer wrapper around the gallery view state.
#[derive(Default, PartialEq)]
pub struct Store(pub GalleryState);

impl Reducible for Store {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Store(self.0.clone().reduce(action)))
    }
}

#[derive(Properties)]
pub struct AppProps {
    pub gallery: Rc<Gallery<HttpGifApi>>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.gallery, &other.gallery)
    }
}

/// Log a failed list request. Mutation failures are logged by the handlers.
fn report(result: Result<()>) {
    if let Err(err) = result {
        tracing::error!(error = %err, "failed to load gifs");
    }
}

fn dispatch_with<T: 'static>(
    store: &UseReducerHandle<Store>,
    action: fn(T) -> GalleryAction,
) -> Callback<T> {
    let dispatcher = store.dispatcher();
    Callback::from(move |value: T| dispatcher.dispatch(action(value)))
}

/// Main application component.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let store = use_reducer(Store::default);

    // Load the gifs once on mount
    {
        let gallery = props.gallery.clone();
        let dispatcher = store.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                report(gallery.refresh(&|a| dispatcher.dispatch(a)).await);
            });
            || ()
        });
    }

    let on_create = {
        let gallery = props.gallery.clone();
        let store = store.clone();
        Callback::from(move |_: ()| {
            let gallery = gallery.clone();
            let dispatcher = store.dispatcher();
            let form = store.0.create_form.clone();
            spawn_local(async move {
                report(gallery.create(&form, &|a| dispatcher.dispatch(a)).await);
            });
        })
    };

    let on_update = {
        let gallery = props.gallery.clone();
        let store = store.clone();
        Callback::from(move |_: ()| {
            let gallery = gallery.clone();
            let dispatcher = store.dispatcher();
            let selected = store.0.selected.clone();
            let form = store.0.edit_form.clone();
            spawn_local(async move {
                report(
                    gallery
                        .update(selected.as_ref(), &form, &|a| dispatcher.dispatch(a))
                        .await,
                );
            });
        })
    };

    let on_delete = {
        let gallery = props.gallery.clone();
        let store = store.clone();
        Callback::from(move |_: ()| {
            let gallery = gallery.clone();
            let dispatcher = store.dispatcher();
            let selected = store.0.selected.clone();
            spawn_local(async move {
                report(
                    gallery
                        .delete(selected.as_ref(), &|a| dispatcher.dispatch(a))
                        .await,
                );
            });
        })
    };

    let on_select: Callback<Gif> = dispatch_with(&store, GalleryAction::Select);
    let state = &store.0;

    html! {
        <div class="app">
            <header class="header">
                <div class="header-left">
                    <h1>{ "gif-gallery" }</h1>
                    <p class="subtitle">{ "Click a gif to edit or delete it" }</p>
                </div>
            </header>

            <main class="main">
                <div class="panels">
                    <CreateForm
                        form={state.create_form.clone()}
                        on_alt_text={dispatch_with(&store, GalleryAction::SetCreateAltText)}
                        on_url={dispatch_with(&store, GalleryAction::SetCreateUrl)}
                        on_submit={on_create}
                    />

                    <EditForm
                        title={state.edit_title.clone()}
                        form={state.edit_form.clone()}
                        on_alt_text={dispatch_with(&store, GalleryAction::SetEditAltText)}
                        on_url={dispatch_with(&store, GalleryAction::SetEditUrl)}
                        on_submit={on_update}
                        on_delete={on_delete}
                    />
                </div>

                <GifGrid
                    gifs={state.gifs.clone()}
                    selected={state.selected.as_ref().map(|id| id.to_string())}
                    on_select={on_select}
                />
            </main>

            <footer class="footer">
                <div class="footer-row">
                    <span class="footer-left">{ format!("{} gifs", state.gifs.len()) }</span>
                    <span class="footer-build">
                        { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                    </span>
                </div>
            </footer>
        </div>
    }
}
