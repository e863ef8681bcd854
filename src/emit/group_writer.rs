use super::{error::EmitError, target_writer::TargetWriter};
use crate::ir::Dependency;

pub fn write_group(mut writer: TargetWriter) -> Result<String, EmitError> {
    let target = writer.target();
    let outputs = target
        .linked_deps()
        .map(|dependency| writer.dependency_output(dependency.label()))
        .collect::<Result<Vec<_>, _>>()?;
    let data_outputs = target
        .data_deps()
        .iter()
        .map(Dependency::label)
        .map(|label| writer.dependency_output(label))
        .collect::<Result<Vec<_>, _>>()?;

    writer.write_stamp(&outputs, &data_outputs)?;

    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ir::OutputType,
        testing::{dependency, label, resolve_targets, target},
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn write_group_stamp() {
        let graph = resolve_targets(vec![
            target("//foo:a", OutputType::Group),
            target("//foo:b", OutputType::Group),
            target("//foo:all", OutputType::Group)
                .with_public_deps(vec![dependency("//foo:a")])
                .with_data_deps(vec![dependency("//foo:b")]),
        ])
        .unwrap();

        assert_eq!(
            write_group(TargetWriter::new(&graph, &label("//foo:all")).unwrap()).unwrap(),
            "build obj/foo/all.stamp: stamp obj/foo/a.stamp || obj/foo/b.stamp\n"
        );
    }
}
