use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

use crate::config::COPY_TOAST_MS;

async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}

/// Replaces the pending timer. Dropping a `Timeout` cancels it, so only the
/// latest click decides when the indicator goes away.
fn rearm<T>(slot: &RefCell<Option<T>>, next: T) {
    *slot.borrow_mut() = Some(next);
}

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub text: AttrValue,
    pub label: AttrValue,
}

/// Copies `text` and shows "已复制" for a couple of seconds.
#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let copied = use_state(|| false);
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    let onclick = {
        let copied = copied.clone();
        let hide_timer = hide_timer.clone();
        let text = props.text.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let copied = copied.clone();
            let hide_timer = hide_timer.clone();
            let text = text.clone();
            spawn_local(async move {
                match write_clipboard(&text).await {
                    Ok(()) => {
                        info!("Copied {} to clipboard", text);
                        let reset = copied.clone();
                        copied.set(true);
                        rearm(&*hide_timer, Timeout::new(COPY_TOAST_MS, move || {
                            reset.set(false);
                        }));
                    }
                    Err(err) => warn!("Clipboard write failed: {:?}", err),
                }
            });
        })
    };

    html! {
        <button class={classes!("copy-button", (*copied).then(|| "copied"))} {onclick}>
            if *copied {
                { "✓ 已复制" }
            } else {
                { format!("⧉ {}", props.label) }
            }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Pending(Rc<Cell<u32>>);

    impl Drop for Pending {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn second_click_cancels_first_timer() {
        let dropped = Rc::new(Cell::new(0));
        let slot = RefCell::new(None);

        rearm(&slot, Pending(dropped.clone()));
        assert_eq!(dropped.get(), 0);

        rearm(&slot, Pending(dropped.clone()));
        assert_eq!(dropped.get(), 1);
        assert!(slot.borrow().is_some());

        drop(slot);
        assert_eq!(dropped.get(), 2);
    }
}
