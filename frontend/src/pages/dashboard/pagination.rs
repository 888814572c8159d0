//! Pagination component - Previous/next and numbered page buttons
//!
//! Buttons at the boundaries are disabled rather than wrapping. With no
//! results there are no page numbers and both directions are disabled.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current: usize,
    pub total: usize,
    pub can_prev: bool,
    pub can_next: bool,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_page: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let on_prev = props.on_prev.reform(|_: MouseEvent| ());
    let on_next = props.on_next.reform(|_: MouseEvent| ());

    html! {
        <nav class="pagination" aria-label="Pagination">
            <button class="page-step" disabled={!props.can_prev} onclick={on_prev}>
                { "Previous" }
            </button>

            <div class="page-numbers">
                {
                    (1..=props.total).map(|page| {
                        let class = if page == props.current {
                            "page-number current"
                        } else {
                            "page-number"
                        };
                        let onclick = props.on_page.reform(move |_: MouseEvent| page);
                        html! { <button {class} {onclick}>{ page.to_string() }</button> }
                    }).collect::<Html>()
                }
            </div>

            <button class="page-step" disabled={!props.can_next} onclick={on_next}>
                { "Next" }
            </button>
        </nav>
    }
}
