use super::cancel::CancelToken;
use super::error::WidgetError;
use super::store::DisplayedSet;
use super::types::{Notification, NotificationId};
use crate::platform::Platform;
use crate::ports::{ApiPort, LoggerPort, TimerPort, ViewPort};
use std::cell::RefCell;

/// How long a toast stays up when nobody touches it.
pub const TOAST_TIMEOUT_MS: i32 = 5_000;

/// Fetches the backlog of undelivered notifications and renders every item
/// not already displayed. Returns how many entries were added.
///
/// A transport or decode failure propagates to the caller; there is no
/// retry here, the reconnecting stream delivers what a failed load missed.
/// The token is checked when the fetch resumes: a cancelled task renders
/// nothing, the request itself is past aborting.
pub async fn load_backlog(
    platform: &Platform,
    store: &RefCell<DisplayedSet>,
    token: &CancelToken,
) -> Result<usize, WidgetError> {
    if token.is_cancelled() {
        return Ok(0);
    }

    let backlog = platform.api().fetch_backlog().await?;
    if token.is_cancelled() {
        return Ok(0);
    }

    let mut added = 0;
    for notification in &backlog {
        if render_if_new(platform, store, notification)? {
            added += 1;
        }
    }

    Ok(added)
}

/// Dedup-render: appends a list entry and tracks the id, unless the id is
/// already displayed. Returns whether an entry was added.
///
/// Render-then-track order: if rendering fails the id stays untracked, so
/// the store never claims a node that does not exist.
pub fn render_if_new(
    platform: &Platform,
    store: &RefCell<DisplayedSet>,
    notification: &Notification,
) -> Result<bool, WidgetError> {
    if store.borrow().contains(&notification.id) {
        return Ok(false);
    }

    platform.view().append_entry(notification)?;
    store.borrow_mut().track(notification.id.clone());
    Ok(true)
}

/// Marks a notification read server-side and removes it locally.
///
/// The request outcome is deliberately ignored: the toast, the list entry
/// and the tracked id go away whether the POST succeeded or not, and a
/// failure is never rolled back. A cancelled task stops touching the page
/// at its next resumption.
pub async fn mark_read(
    platform: &Platform,
    store: &RefCell<DisplayedSet>,
    id: &NotificationId,
    token: &CancelToken,
) -> Result<(), WidgetError> {
    if token.is_cancelled() {
        return Ok(());
    }

    let _ = platform.api().mark_read(id).await;
    if token.is_cancelled() {
        return Ok(());
    }

    platform.view().remove_toast(id)?;
    platform.view().remove_entry(id)?;
    store.borrow_mut().untrack(id);
    Ok(())
}

/// The per-message path for push-delivered notifications: toast first, then
/// dedup-render into the list.
///
/// The toast is shown even for an id already in the list; only the list
/// rendering is deduplicated. Auto-removal of the toast is scheduled on the
/// timer port for [`TOAST_TIMEOUT_MS`].
pub fn accept_push(
    platform: &Platform,
    store: &RefCell<DisplayedSet>,
    notification: &Notification,
) -> Result<(), WidgetError> {
    platform.view().show_toast(notification)?;

    let timeout_platform = platform.clone();
    let toast_id = notification.id.clone();
    platform.timer().set_timeout(
        Box::new(move || {
            if let Err(e) = timeout_platform.view().remove_toast(&toast_id) {
                timeout_platform
                    .logger()
                    .error(&format!("toast removal failed: {e}"));
            }
        }),
        TOAST_TIMEOUT_MS,
    )?;

    render_if_new(platform, store, notification)?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::adapters::native::{
        ManualTimer, RecordingView, ScriptedApi, ScriptedStream, ViewEvent,
    };
    use crate::platform::Platform;
    use futures::executor::block_on;
    use std::rc::Rc;

    fn notification(id: i64, title: &str, message: &str) -> Notification {
        Notification {
            id: NotificationId::from(id),
            title: Some(title.to_string()),
            message: message.to_string(),
        }
    }

    struct Fixture {
        platform: Platform,
        api: Rc<ScriptedApi>,
        view: Rc<RecordingView>,
        timer: Rc<ManualTimer>,
        store: Rc<RefCell<DisplayedSet>>,
        token: CancelToken,
    }

    fn fixture_with_backlog(backlog: Vec<Notification>) -> Fixture {
        let api = Rc::new(ScriptedApi::with_backlog(backlog));
        let view = Rc::new(RecordingView::new());
        let timer = Rc::new(ManualTimer::new());
        let stream = Rc::new(ScriptedStream::new());
        let platform = Platform::new(api.clone(), view.clone(), timer.clone(), stream);

        Fixture {
            platform,
            api,
            view,
            timer,
            store: Rc::new(RefCell::new(DisplayedSet::new())),
            token: CancelToken::new(),
        }
    }

    fn fixture() -> Fixture {
        fixture_with_backlog(Vec::new())
    }

    #[test]
    fn test_backlog_renders_each_id_once() {
        let f = fixture_with_backlog(vec![
            notification(1, "A", "m1"),
            notification(2, "B", "m2"),
            notification(1, "A", "m1"),
        ]);

        let added = block_on(load_backlog(&f.platform, &f.store, &f.token)).unwrap();

        assert_eq!(added, 2);
        assert_eq!(f.view.entry_count(&NotificationId::from(1)), 1);
        assert_eq!(f.view.entry_count(&NotificationId::from(2)), 1);
        assert_eq!(f.store.borrow().len(), 2);
    }

    #[test]
    fn test_backlog_skips_already_displayed() {
        let f = fixture_with_backlog(vec![notification(1, "A", "m1")]);
        render_if_new(&f.platform, &f.store, &notification(1, "A", "m1")).unwrap();

        let added = block_on(load_backlog(&f.platform, &f.store, &f.token)).unwrap();

        assert_eq!(added, 0);
        assert_eq!(f.view.entry_count(&NotificationId::from(1)), 1);
    }

    #[test]
    fn test_backlog_failure_propagates() {
        let f = fixture();
        f.api.fail_backlog(WidgetError::transport("connection refused"));

        let result = block_on(load_backlog(&f.platform, &f.store, &f.token));

        assert!(result.is_err());
        assert!(f.view.entries().is_empty());
        assert!(f.store.borrow().is_empty());
    }

    #[test]
    fn test_mark_read_removes_entry_toast_and_id() {
        let f = fixture();
        let n = notification(1, "A", "m1");
        accept_push(&f.platform, &f.store, &n).unwrap();

        block_on(mark_read(&f.platform, &f.store, &n.id, &f.token)).unwrap();

        assert!(!f.view.has_entry(&n.id));
        assert!(!f.view.has_toast(&n.id));
        assert!(!f.store.borrow().contains(&n.id));
        assert_eq!(f.api.read_calls(), vec![n.id]);
    }

    #[test]
    fn test_mark_read_removes_locally_when_request_fails() {
        let f = fixture();
        let n = notification(1, "A", "m1");
        render_if_new(&f.platform, &f.store, &n).unwrap();
        f.api.fail_mark_read(WidgetError::transport("500"));

        block_on(mark_read(&f.platform, &f.store, &n.id, &f.token)).unwrap();

        assert!(!f.view.has_entry(&n.id));
        assert!(!f.store.borrow().contains(&n.id));
    }

    #[test]
    fn test_push_shows_toast_before_entry() {
        let f = fixture();
        accept_push(&f.platform, &f.store, &notification(1, "A", "m1")).unwrap();

        assert_eq!(
            f.view.events(),
            vec![
                ViewEvent::ToastShown(NotificationId::from(1)),
                ViewEvent::EntryAppended(NotificationId::from(1)),
            ]
        );
    }

    #[test]
    fn test_duplicate_push_toasts_again_but_renders_once() {
        let f = fixture();
        let n = notification(1, "A", "m1");

        accept_push(&f.platform, &f.store, &n).unwrap();
        accept_push(&f.platform, &f.store, &n).unwrap();

        assert_eq!(f.view.entry_count(&n.id), 1);
        assert_eq!(f.view.toast_count(&n.id), 1);
        assert_eq!(f.view.toasts_shown(&n.id), 2);
    }

    #[test]
    fn test_toast_autoremoves_after_timeout() {
        let f = fixture();
        let n = notification(1, "A", "m1");
        accept_push(&f.platform, &f.store, &n).unwrap();

        f.timer.advance(TOAST_TIMEOUT_MS as i64 - 1);
        assert!(f.view.has_toast(&n.id));

        f.timer.advance(1);
        assert!(!f.view.has_toast(&n.id));

        // The list entry and its id survive the toast.
        assert!(f.view.has_entry(&n.id));
        assert!(f.store.borrow().contains(&n.id));
    }

    #[test]
    fn test_toast_timeout_after_ack_is_noop() {
        let f = fixture();
        let n = notification(1, "A", "m1");
        accept_push(&f.platform, &f.store, &n).unwrap();

        block_on(mark_read(&f.platform, &f.store, &n.id, &f.token)).unwrap();
        f.timer.advance(TOAST_TIMEOUT_MS as i64);

        assert!(!f.view.has_toast(&n.id));
        assert!(!f.view.has_entry(&n.id));
    }

    #[test]
    fn test_backlog_then_same_push_renders_once() {
        // Backlog returns [{id:1,title:"A",message:"m1"}]; the stream later
        // pushes the same record: exactly one entry for id 1.
        let f = fixture_with_backlog(vec![notification(1, "A", "m1")]);
        block_on(load_backlog(&f.platform, &f.store, &f.token)).unwrap();

        accept_push(&f.platform, &f.store, &notification(1, "A", "m1")).unwrap();

        assert_eq!(f.view.entry_count(&NotificationId::from(1)), 1);
        assert_eq!(f.store.borrow().len(), 1);
    }

    #[test]
    fn test_toast_click_and_list_click_share_one_path() {
        let f = fixture();
        let n = notification(1, "A", "m1");
        accept_push(&f.platform, &f.store, &n).unwrap();

        let platform = f.platform.clone();
        let store = Rc::clone(&f.store);
        let token = f.token.clone();
        f.view.set_ack_handler(Rc::new(move |id: NotificationId| {
            block_on(mark_read(&platform, &store, &id, &token)).unwrap();
        }));

        // The view dispatches the same handler for both controls.
        f.view.click_ack(&n.id);

        assert!(!f.view.has_entry(&n.id));
        assert!(!f.view.has_toast(&n.id));
        assert!(!f.store.borrow().contains(&n.id));
        assert_eq!(f.api.read_calls(), vec![n.id]);
    }

    #[test]
    fn test_cancelled_backlog_load_renders_nothing() {
        let f = fixture_with_backlog(vec![notification(1, "A", "m1")]);
        f.token.cancel();

        let added = block_on(load_backlog(&f.platform, &f.store, &f.token)).unwrap();

        assert_eq!(added, 0);
        assert!(f.view.entries().is_empty());
        assert!(f.store.borrow().is_empty());
    }

    #[test]
    fn test_cancelled_mark_read_leaves_page_alone() {
        let f = fixture();
        let n = notification(1, "A", "m1");
        render_if_new(&f.platform, &f.store, &n).unwrap();

        f.token.cancel();
        block_on(mark_read(&f.platform, &f.store, &n.id, &f.token)).unwrap();

        assert!(f.view.has_entry(&n.id));
        assert!(f.store.borrow().contains(&n.id));
        assert!(f.api.read_calls().is_empty());
    }
}
