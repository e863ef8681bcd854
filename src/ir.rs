mod action_values;
mod build_settings;
mod config;
mod config_values;
mod dependency;
mod deps_format;
mod inherited_libraries;
mod item;
mod label;
mod origin;
mod output_file;
mod output_type;
mod precompiled_header;
mod precompiled_header_type;
mod resolution;
mod source_dir;
mod source_file;
mod source_file_type;
mod substitution;
mod substitution_pattern;
mod target;
mod tool;
mod tool_type;
mod toolchain;
mod unique_vector;
mod visibility;

pub use action_values::*;
pub use build_settings::*;
pub use config::*;
pub use config_values::*;
pub use dependency::*;
pub use deps_format::*;
pub use inherited_libraries::*;
pub use item::*;
pub use label::*;
pub use origin::*;
pub use output_file::*;
pub use output_type::*;
pub use precompiled_header::*;
pub use precompiled_header_type::*;
pub use resolution::*;
pub use source_dir::*;
pub use source_file::*;
pub use source_file_type::*;
pub use substitution::*;
pub use substitution_pattern::*;
pub use target::*;
pub use tool::*;
pub use tool_type::*;
pub use toolchain::*;
pub use unique_vector::*;
pub use visibility::*;
