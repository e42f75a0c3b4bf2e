//! Artwork Adapter - 封面 URL 模板

mod template_artwork;

pub use template_artwork::TemplateArtworkResolver;
