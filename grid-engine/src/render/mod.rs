//! Renderers for [`GridView`](crate::view::GridView).

pub mod text;
