//! Viewer Frame Component
//!
//! Embeds the external VNC viewer for one machine. Only the URL is built
//! here; the remote desktop protocol is handled entirely by the viewer.

use shared::{Endpoints, ViewerMode};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewerFrameProps {
    pub endpoints: Rc<Endpoints>,
    /// Machine token, passed to the viewer as connection credential
    pub token: AttrValue,
    pub mode: ViewerMode,
}

#[function_component(ViewerFrame)]
pub fn viewer_frame(props: &ViewerFrameProps) -> Html {
    let src = use_memo(
        (props.endpoints.clone(), props.token.clone(), props.mode),
        |(endpoints, token, mode)| match endpoints.viewer_url(token, *mode) {
            Ok(url) => Some(AttrValue::from(url)),
            Err(e) => {
                log::error!("Cannot build viewer URL: {}", e);
                None
            }
        },
    );

    let class = match props.mode {
        ViewerMode::Thumbnail => "viewer-frame thumbnail",
        ViewerMode::Interactive => "viewer-frame interactive",
    };

    match (*src).clone() {
        Some(src) => html! {
            <iframe
                {class}
                {src}
                title={props.token.clone()}
                allow="clipboard-read; clipboard-write"
            />
        },
        None => html! {
            <div class="viewer-unavailable">{ "Viewer unavailable" }</div>
        },
    }
}
