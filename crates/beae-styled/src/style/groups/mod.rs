//! Built-in prop groups, one file per CSS concern.
//!
//! Each group lists `(prop name, config)` pairs; [`all`] feeds them to
//! [`PropConfigTable`](super::PropConfigTable) in a fixed order.

mod background;
mod border;
mod color;
mod effect;
mod filter;
mod flexbox;
mod grid;
mod interactivity;
mod layout;
mod list;
mod others;
mod position;
mod ring;
mod space;
mod text_decoration;
mod transform;
mod transition;
mod typography;

use super::config::PropGroup;

/// Every built-in group.
pub fn all() -> Vec<PropGroup> {
    vec![
        background::group(),
        border::group(),
        color::group(),
        effect::group(),
        filter::group(),
        flexbox::group(),
        grid::group(),
        interactivity::group(),
        layout::group(),
        list::group(),
        others::group(),
        position::group(),
        ring::group(),
        space::group(),
        text_decoration::group(),
        transform::group(),
        transition::group(),
        typography::group(),
    ]
}
