use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub cart_count: usize,
    pub on_cart: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { cart_count, on_cart } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(window) = window.as_ref() {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > 40.0);
                    }
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = window.as_ref() {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window.as_ref() {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let open_cart = {
        let on_cart = on_cart.clone();
        Callback::from(move |_: MouseEvent| on_cart.emit(()))
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-brand">
                    <div class="nav-logo">{"S"}</div>
                    <div class="nav-title">
                        <h1>{"星川的 AI 专业课"}</h1>
                        <p>{"Star River Professional AI"}</p>
                    </div>
                </div>

                <div class={menu_class} onclick={close_menu}>
                    <a href="#hero" class="nav-link">{"首页"}</a>
                    <a href="#courses" class="nav-link">{"课程总览"}</a>
                    <a href="#about" class="nav-link">{"适合人群"}</a>
                </div>

                <div class="nav-actions">
                    <button class="nav-cart" onclick={open_cart} title="预约单">
                        {"🛍"}
                        if *cart_count > 0 {
                            <span class="nav-cart-badge">{cart_count.to_string()}</span>
                        }
                    </button>
                    <button class="burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <a href="#about" class="nav-consult">{"咨询助教"}</a>
                </div>
            </div>
        </nav>
    }
}
