//! Event handlers for the gallery page.
//!
//! Each handler issues its request through a [`GifApi`] and reports view
//! changes as [`GalleryAction`]s through `dispatch`. Handlers never hold the
//! view state across an await: the caller snapshots what a handler needs
//! (form contents, selected id) and the reducer applies results whenever they
//! arrive.
//!
//! Failed mutations are logged and swallowed. Only the list request can
//! fail a handler, and that error is returned to the caller.

use std::cell::Cell;

use crate::client::GifApi;
use crate::error::Result;
use crate::record::{GifForm, GifId};
use crate::state::GalleryAction;

/// Sink for view updates produced by a handler.
pub type Dispatch<'a> = &'a dyn Fn(GalleryAction);

/// The four page handlers bound to one backend.
pub struct Gallery<A> {
    api: A,
    /// Sequence number of the last list request sent.
    list_seq: Cell<u64>,
}

impl<A: GifApi> Gallery<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            list_seq: Cell::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Clear the shown gifs, then show whatever the backend lists.
    ///
    /// Each call is numbered so a response that arrives after a newer
    /// request was sent is dropped by the reducer.
    pub async fn refresh(&self, dispatch: Dispatch<'_>) -> Result<()> {
        let seq = self.list_seq.get() + 1;
        self.list_seq.set(seq);

        dispatch(GalleryAction::ListCleared(seq));
        let gifs = self.api.list().await?;
        tracing::debug!(seq, count = gifs.len(), "listed gifs");
        dispatch(GalleryAction::Listed(seq, gifs));
        Ok(())
    }

    /// Submit the create form.
    ///
    /// On failure the form is left as typed and the list is not re-fetched.
    pub async fn create(&self, form: &GifForm, dispatch: Dispatch<'_>) -> Result<()> {
        match self.api.create(form.to_new_gif()).await {
            Ok(gif) => {
                tracing::debug!(id = %gif.id, alt_text = %gif.alt_text, url = %gif.url, "created gif");
                dispatch(GalleryAction::Created(gif));
                self.refresh(dispatch).await
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to create gif");
                Ok(())
            }
        }
    }

    /// Submit the edit form against the selected gif.
    ///
    /// The list is re-fetched whether or not the update succeeded.
    pub async fn update(
        &self,
        selected: Option<&GifId>,
        form: &GifForm,
        dispatch: Dispatch<'_>,
    ) -> Result<()> {
        let Some(id) = selected else {
            tracing::warn!("no gif selected, skipping update");
            return Ok(());
        };

        tracing::debug!(%id, alt_text = %form.alt_text, url = %form.url, "updating gif");
        if let Err(err) = self.api.update(form.to_update(id.clone())).await {
            tracing::error!(%id, error = %err, "failed to update gif");
        }
        self.refresh(dispatch).await
    }

    /// Delete the selected gif.
    pub async fn delete(&self, selected: Option<&GifId>, dispatch: Dispatch<'_>) -> Result<()> {
        let Some(id) = selected else {
            tracing::warn!("no gif selected, skipping delete");
            return Ok(());
        };

        match self.api.delete(id.clone()).await {
            Ok(gif) => {
                tracing::info!(id = %gif.id, "deleted gif");
                self.refresh(dispatch).await
            }
            Err(err) => {
                tracing::error!(%id, error = %err, "failed to delete gif");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use super::*;
    use crate::error::GalleryError;
    use crate::record::{Gif, GifUpdate, NewGif};
    use crate::state::GalleryState;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(NewGif),
        List,
        Update(GifUpdate),
        Delete(GifId),
    }

    /// In-memory backend that records every call.
    #[derive(Default)]
    struct FakeApi {
        gifs: RefCell<Vec<Gif>>,
        calls: RefCell<Vec<Call>>,
        next_id: RefCell<u32>,
        fail_mutations: bool,
        fail_list: bool,
    }

    impl FakeApi {
        fn failing_mutations() -> Self {
            Self {
                fail_mutations: true,
                ..Self::default()
            }
        }

        fn seeded(gifs: Vec<Gif>) -> Self {
            Self {
                gifs: RefCell::new(gifs),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn rejected() -> GalleryError {
            GalleryError::Status {
                status: 500,
                body: "boom".to_string(),
            }
        }
    }

    #[async_trait(?Send)]
    impl GifApi for FakeApi {
        async fn create(&self, gif: NewGif) -> Result<Gif> {
            self.calls.borrow_mut().push(Call::Create(gif.clone()));
            if self.fail_mutations {
                return Err(Self::rejected());
            }
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            let created = Gif {
                id: GifId::new(format!("gif-{next_id}")),
                alt_text: gif.alt_text,
                url: gif.url,
                created_at: None,
                updated_at: None,
            };
            self.gifs.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn list(&self) -> Result<Vec<Gif>> {
            self.calls.borrow_mut().push(Call::List);
            if self.fail_list {
                return Err(Self::rejected());
            }
            Ok(self.gifs.borrow().clone())
        }

        async fn update(&self, gif: GifUpdate) -> Result<Gif> {
            self.calls.borrow_mut().push(Call::Update(gif.clone()));
            if self.fail_mutations {
                return Err(Self::rejected());
            }
            let mut gifs = self.gifs.borrow_mut();
            let existing = gifs
                .iter_mut()
                .find(|g| g.id == gif.id)
                .ok_or(GalleryError::MissingData("updateGif"))?;
            existing.alt_text = gif.alt_text;
            existing.url = gif.url;
            Ok(existing.clone())
        }

        async fn delete(&self, id: GifId) -> Result<Gif> {
            self.calls.borrow_mut().push(Call::Delete(id.clone()));
            if self.fail_mutations {
                return Err(Self::rejected());
            }
            let mut gifs = self.gifs.borrow_mut();
            let pos = gifs
                .iter()
                .position(|g| g.id == id)
                .ok_or(GalleryError::MissingData("deleteGif"))?;
            Ok(gifs.remove(pos))
        }
    }

    /// Collects dispatched actions and folds them into a state.
    #[derive(Default)]
    struct Recorder {
        state: RefCell<GalleryState>,
        actions: RefCell<Vec<GalleryAction>>,
    }

    impl Recorder {
        fn with_state(state: GalleryState) -> Self {
            Self {
                state: RefCell::new(state),
                ..Self::default()
            }
        }

        fn dispatch(&self, action: GalleryAction) {
            self.actions.borrow_mut().push(action.clone());
            self.state.borrow_mut().apply(action);
        }

        fn state(&self) -> GalleryState {
            self.state.borrow().clone()
        }
    }

    fn gif(id: &str, alt: &str) -> Gif {
        Gif {
            id: GifId::new(id),
            alt_text: alt.to_string(),
            url: format!("https://media.example/{id}.gif"),
            created_at: None,
            updated_at: None,
        }
    }

    fn form(alt: &str, url: &str) -> GifForm {
        GifForm {
            alt_text: alt.to_string(),
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_sends_form_then_refetches() {
        let gallery = Gallery::new(FakeApi::default());
        let recorder = Recorder::with_state(GalleryState {
            create_form: form("party parrot", "https://media.example/parrot.gif"),
            ..GalleryState::default()
        });
        let create_form = recorder.state().create_form;

        gallery
            .create(&create_form, &|a| recorder.dispatch(a))
            .await
            .unwrap();

        assert_eq!(
            gallery.api().calls(),
            vec![
                Call::Create(NewGif {
                    alt_text: "party parrot".to_string(),
                    url: "https://media.example/parrot.gif".to_string(),
                }),
                Call::List,
            ]
        );
        let state = recorder.state();
        assert_eq!(state.create_form, GifForm::default());
        assert_eq!(state.gifs.len(), 1);
        assert_eq!(state.gifs[0].alt_text, "party parrot");
    }

    #[tokio::test]
    async fn test_failed_create_keeps_form_and_skips_refetch() {
        let gallery = Gallery::new(FakeApi::failing_mutations());
        let typed = form("cat", "https://media.example/cat.gif");
        let recorder = Recorder::with_state(GalleryState {
            create_form: typed.clone(),
            ..GalleryState::default()
        });

        gallery
            .create(&typed, &|a| recorder.dispatch(a))
            .await
            .unwrap();

        assert_eq!(
            gallery.api().calls(),
            vec![Call::Create(typed.to_new_gif())]
        );
        assert!(recorder.actions.borrow().is_empty());
        assert_eq!(recorder.state().create_form, typed);
    }

    #[tokio::test]
    async fn test_refresh_clears_before_listing() {
        let gallery = Gallery::new(FakeApi::seeded(vec![gif("a", "a"), gif("b", "b")]));
        let recorder = Recorder::with_state(GalleryState {
            gifs: vec![gif("stale", "stale")],
            ..GalleryState::default()
        });

        gallery.refresh(&|a| recorder.dispatch(a)).await.unwrap();

        assert_eq!(
            *recorder.actions.borrow(),
            vec![
                GalleryAction::ListCleared(1),
                GalleryAction::Listed(1, vec![gif("a", "a"), gif("b", "b")]),
            ]
        );
        assert_eq!(recorder.state().gifs, vec![gif("a", "a"), gif("b", "b")]);
    }

    /// Backend whose list responses are released by the test, in any order.
    struct GatedApi {
        pending: RefCell<VecDeque<oneshot::Receiver<Vec<Gif>>>>,
    }

    #[async_trait(?Send)]
    impl GifApi for GatedApi {
        async fn create(&self, _gif: NewGif) -> Result<Gif> {
            Err(GalleryError::MissingData("createGif"))
        }

        async fn list(&self) -> Result<Vec<Gif>> {
            let rx = self
                .pending
                .borrow_mut()
                .pop_front()
                .ok_or(GalleryError::MissingData("listGifs"))?;
            rx.await.map_err(|_| GalleryError::MissingData("listGifs"))
        }

        async fn update(&self, _gif: GifUpdate) -> Result<Gif> {
            Err(GalleryError::MissingData("updateGif"))
        }

        async fn delete(&self, _id: GifId) -> Result<Gif> {
            Err(GalleryError::MissingData("deleteGif"))
        }
    }

    #[tokio::test]
    async fn test_overlapping_refreshes_keep_newest_list() {
        let (older_tx, older_rx) = oneshot::channel();
        let (newer_tx, newer_rx) = oneshot::channel();
        let gallery = Gallery::new(GatedApi {
            pending: RefCell::new(VecDeque::from([older_rx, newer_rx])),
        });
        let recorder = Recorder::default();
        let dispatch = |a: GalleryAction| recorder.dispatch(a);

        let older = gallery.refresh(&dispatch);
        let newer = gallery.refresh(&dispatch);
        let release = async {
            newer_tx.send(vec![gif("b", "b")]).unwrap();
            // join! rotates its poll order; two passes let the newer refresh finish
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
            older_tx
                .send(vec![gif("a", "a"), gif("deleted", "deleted")])
                .unwrap();
        };
        let (older, newer, ()) = tokio::join!(older, newer, release);
        older.unwrap();
        newer.unwrap();

        let actions = recorder.actions.borrow().clone();
        assert_eq!(
            actions.last(),
            Some(&GalleryAction::Listed(
                1,
                vec![gif("a", "a"), gif("deleted", "deleted")]
            ))
        );
        let state = recorder.state();
        assert_eq!(state.list_seq, 2);
        assert_eq!(state.gifs, vec![gif("b", "b")]);
    }

    #[tokio::test]
    async fn test_refresh_error_propagates() {
        let gallery = Gallery::new(FakeApi {
            fail_list: true,
            ..FakeApi::default()
        });
        let recorder = Recorder::with_state(GalleryState {
            gifs: vec![gif("stale", "stale")],
            ..GalleryState::default()
        });

        let err = gallery.refresh(&|a| recorder.dispatch(a)).await.unwrap_err();

        assert!(matches!(err, GalleryError::Status { status: 500, .. }));
        assert!(recorder.state().gifs.is_empty());
    }

    #[tokio::test]
    async fn test_update_uses_selected_id_and_edit_form() {
        let gallery = Gallery::new(FakeApi::seeded(vec![gif("g1", "cat"), gif("g2", "dog")]));
        let recorder = Recorder::default();
        recorder.dispatch(GalleryAction::Select(gif("g2", "dog")));
        recorder.dispatch(GalleryAction::SetEditAltText("good dog".to_string()));
        let state = recorder.state();

        gallery
            .update(state.selected.as_ref(), &state.edit_form, &|a| {
                recorder.dispatch(a)
            })
            .await
            .unwrap();

        assert_eq!(
            gallery.api().calls(),
            vec![
                Call::Update(GifUpdate {
                    id: GifId::new("g2"),
                    alt_text: "good dog".to_string(),
                    url: "https://media.example/g2.gif".to_string(),
                }),
                Call::List,
            ]
        );
        assert_eq!(recorder.state().gifs[1].alt_text, "good dog");
    }

    #[tokio::test]
    async fn test_failed_update_still_refetches() {
        let gallery = Gallery::new(FakeApi::failing_mutations());
        let id = GifId::new("g1");

        gallery
            .update(Some(&id), &form("x", "y"), &|_| {})
            .await
            .unwrap();

        let calls = gallery.api().calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], Call::List);
    }

    #[tokio::test]
    async fn test_update_without_selection_sends_nothing() {
        let gallery = Gallery::new(FakeApi::default());

        gallery
            .update(None, &form("x", "y"), &|_| {})
            .await
            .unwrap();

        assert!(gallery.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_selected_then_refetches() {
        let gallery = Gallery::new(FakeApi::seeded(vec![gif("g1", "cat"), gif("g2", "dog")]));
        let recorder = Recorder::default();
        recorder.dispatch(GalleryAction::Select(gif("g1", "cat")));
        let selected = recorder.state().selected;

        gallery
            .delete(selected.as_ref(), &|a| recorder.dispatch(a))
            .await
            .unwrap();

        assert_eq!(
            gallery.api().calls(),
            vec![Call::Delete(GifId::new("g1")), Call::List]
        );
        assert_eq!(recorder.state().gifs, vec![gif("g2", "dog")]);
    }

    #[tokio::test]
    async fn test_failed_delete_is_swallowed() {
        let gallery = Gallery::new(FakeApi::failing_mutations());
        let id = GifId::new("g1");

        gallery.delete(Some(&id), &|_| {}).await.unwrap();

        assert_eq!(gallery.api().calls(), vec![Call::Delete(id)]);
    }

    #[tokio::test]
    async fn test_delete_without_selection_sends_nothing() {
        let gallery = Gallery::new(FakeApi::default());

        gallery.delete(None, &|_| {}).await.unwrap();

        assert!(gallery.api().calls().is_empty());
    }
}
