use log::info;
use yew::prelude::*;

use crate::booking::panel::CourseDetailPanel;
use crate::cart::{Cart, CartAction};
use crate::catalog::{find_course, COURSES};
use crate::components::nav::Nav;
use crate::models::{CartItem, ClassType, Course};

#[derive(Properties, PartialEq)]
struct CourseCardProps {
    course: &'static Course,
    in_cart: bool,
    on_open: Callback<&'static Course>,
}

#[function_component(CourseCard)]
fn course_card(props: &CourseCardProps) -> Html {
    let course = props.course;
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(course))
    };

    html! {
        <div class="course-card" {onclick}>
            <div class="course-card-glow"></div>
            <div class="course-card-content">
                <div class="row">
                    <span class="level-badge">{course.level}</span>
                    if props.in_cart {
                        <span class="in-cart-pill"><span class="pulse"></span>{"已在清单"}</span>
                    }
                </div>
                <h3>{course.title}</h3>
                <p class="course-card-summary">{course.short_summary()}</p>
                <button class="course-card-button">{"查看课件内容 ▶"}</button>
            </div>
        </div>
    }
}

fn render_hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <div class="hero-glow hero-glow-blue"></div>
            <div class="hero-glow hero-glow-pink"></div>
            <div class="hero-grid">
                <div class="hero-visual">
                    <img src="https://picsum.photos/800/800?grayscale&blur=2" alt="Star River AI Visual" />
                    <div class="hero-visual-caption">
                        <div class="mono small blue">{"AI VIDEO PRODUCTION"}</div>
                        <div class="strong">{"系统化学习 · 商业化应用"}</div>
                    </div>
                </div>

                <div class="hero-copy">
                    <div class="hero-pill"><span class="pulse pink"></span>{"2025 全新升级"}</div>
                    <h1>{"星川的 "}<span class="gradient-text">{"AI 专业课"}</span></h1>
                    <p class="hero-lead">
                        {"针对需要系统学习 AI 视频制作及商业运用的同学。从认知框架到导演级全流程整合，帮你打通 AI 创作与变现的最后一公里。"}
                    </p>

                    <div class="price-tiles">
                        { for ClassType::ALL.iter().map(|class_type| html! {
                            <div class="price-tile">
                                <div class="strong">{class_type.label()}</div>
                                <p class="price">{format!("¥{}", class_type.price())}<span class="muted small">{"/节"}</span></p>
                                <p class="muted small">{class_type.blurb()}</p>
                            </div>
                        }) }
                    </div>

                    <a href="#courses" class="hero-cta">{"浏览课程列表 ›"}</a>
                </div>
            </div>
        </section>
    }
}

fn render_about() -> Html {
    html! {
        <section id="about" class="about">
            <h2>{"适合人群"}</h2>
            <p class="muted">
                {"如果你对 AI 视频制作有着浓厚的兴趣；"}<br/>
                {"如果你工作中涉及 AIGC 或者有转岗 AI 岗的意向；"}<br/>
                {"欢迎报名星川的 AI 专业课。专业课将兼顾每一位同学的入门基础和学习进度，"}<br/>
                {"并按照商业化的目标教学，实现短期内团体及个人共同进步。"}
            </p>
            <div class="about-points">
                <span><span class="dot pink"></span>{"深入学习视频制作"}</span>
                <span><span class="dot blue"></span>{"多平台综合运用"}</span>
                <span><span class="dot"></span>{"布置和批改作业"}</span>
                <span><span class="dot purple"></span>{"产出高质量成片"}</span>
            </div>
            <footer class="site-footer">
                <p>{"© 2025 Star River AI Professional Course. All rights reserved."}</p>
            </footer>
        </section>
    }
}

#[function_component]
pub fn Home() -> Html {
    let cart = use_reducer(Cart::default);
    let selected = use_state(|| None::<&'static Course>);

    let open_course = {
        let selected = selected.clone();
        Callback::from(move |course: &'static Course| {
            info!("Opening course {}", course.id);
            selected.set(Some(course));
        })
    };

    // Nav cart button: reopen the first booked course, if any.
    let open_cart = {
        let selected = selected.clone();
        let first = cart.first().and_then(|item| find_course(&item.course_id));
        Callback::from(move |_| {
            if let Some(course) = first {
                selected.set(Some(course));
            }
        })
    };

    let add_to_cart = {
        let cart = cart.clone();
        Callback::from(move |item: CartItem| cart.dispatch(CartAction::Add(item)))
    };

    let remove_from_cart = {
        let cart = cart.clone();
        Callback::from(move |course_id: String| cart.dispatch(CartAction::Remove(course_id)))
    };

    let close_panel = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <div class="page">
            <Nav cart_count={cart.len()} on_cart={open_cart} />
            { render_hero() }

            <section id="courses" class="courses">
                <div class="courses-header">
                    <div>
                        <h2>{"课程体系"}</h2>
                        <p class="muted small">{format!("Level 1 - Level {} 循序渐进", COURSES.len())}</p>
                    </div>
                    <div class="courses-count">
                        <div class="muted small">{"Total Modules"}</div>
                        <div class="mono pink">{COURSES.len().to_string()}</div>
                    </div>
                </div>

                <div class="course-grid">
                    { for COURSES.iter().map(|course| html! {
                        <CourseCard
                            key={course.id}
                            course={course}
                            in_cart={cart.contains(course.id)}
                            on_open={open_course.clone()}
                        />
                    }) }
                </div>
            </section>

            { render_about() }

            if let Some(course) = *selected {
                <CourseDetailPanel
                    key={course.id}
                    course={course}
                    cart={(*cart).clone()}
                    on_add={add_to_cart}
                    on_remove={remove_from_cart}
                    on_close={close_panel}
                />
            }
        </div>
    }
}
