//! Process-wide toast queue, rendered as an overlay above the router so
//! entries survive navigation.

use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

/// How long an undismissed toast stays on screen.
pub const TOAST_TTL_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast--success",
            ToastLevel::Error => "toast--error",
            ToastLevel::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u32,
    pub message: AttrValue,
    pub level: ToastLevel,
}

/// The queue itself. Ids come from a monotonic counter, so no two live
/// entries ever share one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    pub entries: Vec<ToastEntry>,
    next_id: u32,
}

pub enum ToastAction {
    Push { message: AttrValue, level: ToastLevel },
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push { message, level } => {
                let id = queue.next_id;
                queue.next_id = queue.next_id.wrapping_add(1);
                queue.entries.push(ToastEntry { id, message, level });
            }
            ToastAction::Dismiss(id) => {
                queue.entries.retain(|entry| entry.id != id);
            }
        }
        queue.into()
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    store: UseReducerHandle<ToastQueue>,
}

impl ToastHandle {
    pub fn show(&self, message: impl Into<AttrValue>, level: ToastLevel) {
        self.store.dispatch(ToastAction::Push {
            message: message.into(),
            level,
        });
    }

    pub fn success(&self, message: impl Into<AttrValue>) {
        self.show(message, ToastLevel::Success);
    }

    pub fn error(&self, message: impl Into<AttrValue>) {
        self.show(message, ToastLevel::Error);
    }

    pub fn dismiss(&self, id: u32) {
        self.store.dispatch(ToastAction::Dismiss(id));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let store = use_reducer(ToastQueue::default);
    let handle = ToastHandle {
        store: store.clone(),
    };
    let on_dismiss = {
        let handle = handle.clone();
        Callback::from(move |id: u32| handle.dismiss(id))
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { for props.children.iter() }
            <div class="toast-stack" role="status" aria-live="polite">
                { for store.entries.iter().map(|entry| html! {
                    <ToastItem key={entry.id} entry={entry.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    entry: ToastEntry,
    on_dismiss: Callback<u32>,
}

/// One rendered toast. Owns its expiry timer; unmounting (dismissal or
/// expiry) drops the timeout.
#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let ToastEntry { id, message, level } = props.entry.clone();

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |&id| {
            let timer = Timeout::new(TOAST_TTL_MS, move || on_dismiss.emit(id));
            move || drop(timer)
        });
    }

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", level.css_class())}>
            <p class="toast__message">{ message }</p>
            <button type="button" class="toast__close" aria-label="Dismiss" onclick={dismiss}>
                { "✕" }
            </button>
        </div>
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().expect("ToastProvider is mounted at the app root")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, message: &str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push {
            message: AttrValue::from(message.to_string()),
            level: ToastLevel::Info,
        })
    }

    #[test]
    fn pushed_entries_get_unique_ids() {
        let queue = Rc::new(ToastQueue::default());
        let queue = push(queue, "one");
        let queue = push(queue, "two");
        let queue = push(queue, "three");
        let ids: Vec<u32> = queue.entries.iter().map(|e| e.id).collect();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids, deduped);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let queue = Rc::new(ToastQueue::default());
        let queue = push(queue, "one");
        let queue = push(queue, "two");
        let target = queue.entries[0].id;
        let queue = queue.reduce(ToastAction::Dismiss(target));
        assert_eq!(queue.entries.len(), 1);
        assert_eq!(queue.entries[0].message.as_str(), "two");
    }

    #[test]
    fn ids_stay_unique_after_dismissal() {
        let queue = Rc::new(ToastQueue::default());
        let queue = push(queue, "one");
        let first = queue.entries[0].id;
        let queue = queue.reduce(ToastAction::Dismiss(first));
        let queue = push(queue, "two");
        assert_ne!(queue.entries[0].id, first);
    }
}
