mod action_writer;
mod binary_writer;
mod copy_writer;
mod error;
mod group_writer;
mod root_writer;
mod target_writer;
mod toolchain_writer;

pub use self::{
    error::EmitError,
    root_writer::{link_pool_depth, render_root},
    toolchain_writer::render_toolchain,
};
use self::{
    action_writer::write_action, binary_writer::BinaryWriter, copy_writer::write_copy,
    group_writer::write_group, target_writer::TargetWriter,
};
use crate::{
    graph::Graph,
    ir::{BuildSettings, Label, OutputType},
};

pub fn render_target(graph: &Graph, label: &Label) -> Result<String, EmitError> {
    let writer = TargetWriter::new(graph, label)?;

    match writer.target().output_type() {
        OutputType::Executable
        | OutputType::SharedLibrary
        | OutputType::StaticLibrary
        | OutputType::SourceSet => BinaryWriter::new(writer).run(),
        OutputType::Group => write_group(writer),
        OutputType::Copy => write_copy(writer),
        OutputType::Action | OutputType::ActionForeach => write_action(writer),
    }
}

pub fn target_file(settings: &BuildSettings, label: &Label) -> String {
    format!("{}/{}.ninja", settings.target_out_dir(label), label.name())
}

pub fn toolchain_file(settings: &BuildSettings, toolchain: &Label) -> String {
    settings.toolchain_prefix(Some(toolchain)) + "toolchain.ninja"
}

pub const ROOT_FILE: &str = "build.ninja";
