//! SVG rendering of a house as an isometric box.

use leptos::prelude::*;

use crate::util::box_geometry::{Viewport, project_box};

#[component]
pub fn BoxScene(length: f64, width: f64, height: f64, #[prop(optional)] viewport: Option<Viewport>) -> impl IntoView {
    let viewport = viewport.unwrap_or_default();
    let projection = project_box(length, width, height, viewport);
    let view_box = format!("0 0 {} {}", viewport.width, viewport.height);

    if projection.faces.is_empty() {
        return view! { <p class="box-scene__empty">"No dimensions to draw."</p> }.into_any();
    }

    view! {
        <svg class="box-scene" viewBox=view_box role="img" aria-label="House volume">
            {projection
                .faces
                .into_iter()
                .map(|face| {
                    view! { <polygon class=face.kind.css_class() points=face.svg_points()></polygon> }
                })
                .collect::<Vec<_>>()}
        </svg>
    }
    .into_any()
}
