mod context;
mod options;

use self::context::Context;
pub use self::options::Options;
use crate::{
    builder::Builder,
    context::Context as ApplicationContext,
    debug,
    description::load_description,
    emit::{
        ROOT_FILE, link_pool_depth, render_root, render_target, render_toolchain, target_file,
        toolchain_file,
    },
    error::ApplicationError,
    graph::Graph,
    ir::{Label, SourceDir},
    parse::parse_label,
    profile,
    resolve::ResolveError,
    runtime_deps::{compute_runtime_deps, main_output},
};
use futures::future::try_join_all;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};
use tokio::spawn;

const RUNTIME_DEPS_EXTENSION: &str = ".runtime_deps";

type File = (String, String);

pub async fn generate(
    application: &Arc<ApplicationContext>,
    description_path: &Path,
    options: Options,
) -> Result<(), ApplicationError> {
    let start = Instant::now();
    let context = Arc::new(Context::new(application.clone(), options));

    let mut timer = Instant::now();
    let mut source = String::new();

    application
        .file_system()
        .read_file_to_string(description_path, &mut source)
        .await?;

    let (settings, items) = load_description(&source, &description_path.display().to_string())?;

    debug!(context, "loaded {} items", items.len());
    profile!(context, "load: {}ms", timer.elapsed().as_millis());
    timer = Instant::now();

    let mut builder = Builder::new(settings);

    for item in items {
        builder.item_defined(item)?;
    }

    let graph = Arc::new(builder.finish()?);

    profile!(context, "resolve: {}ms", timer.elapsed().as_millis());
    timer = Instant::now();

    let files = render_files(&context, &graph).await?;

    profile!(context, "emit: {}ms", timer.elapsed().as_millis());
    timer = Instant::now();

    if context.options().check {
        debug!(context, "skipped writing {} files", files.len());
    } else {
        write_files(&context, &graph, &files).await?;
        profile!(context, "write: {}ms", timer.elapsed().as_millis());
    }

    context
        .console()
        .lock()
        .await
        .write_stdout(
            format!(
                "Done. Made {} targets from {} toolchains in {}ms\n",
                graph.targets().count(),
                graph.toolchains().count(),
                start.elapsed().as_millis()
            )
            .as_bytes(),
        )
        .await?;

    Ok(())
}

async fn render_files(
    context: &Arc<Context>,
    graph: &Arc<Graph>,
) -> Result<Vec<File>, ApplicationError> {
    let mut files = render_targets(context, graph).await?;
    let settings = graph.settings();
    let uses_link_pool = link_pool_depth(graph).is_some();
    let mut toolchain_files = vec![];

    for toolchain in graph.toolchains() {
        let mut target_files = context
            .target_files()
            .get(toolchain.label())
            .map(|files| files.value().clone())
            .unwrap_or_default();

        target_files.sort();

        let file = toolchain_file(settings, toolchain.label());

        files.push((
            file.clone(),
            render_toolchain(settings, toolchain, &target_files, uses_link_pool)?,
        ));
        toolchain_files.push(file);
    }

    files.push((ROOT_FILE.into(), render_root(graph, &toolchain_files)?));

    if let Some(path) = &context.options().runtime_deps_list_file {
        files.extend(render_runtime_deps(context, graph, path).await?);
    }

    Ok(files)
}

async fn render_targets(
    context: &Arc<Context>,
    graph: &Arc<Graph>,
) -> Result<Vec<File>, ApplicationError> {
    let handles = graph
        .resolved_targets()
        .map(|(target, _)| {
            let context = context.clone();
            let graph = graph.clone();
            let label = target.label().clone();

            spawn(async move { render_target_file(&context, &graph, &label).await })
        })
        .collect::<Vec<_>>();
    let mut files = vec![];
    let mut first_error = None;

    for handle in handles {
        match handle.await? {
            Ok(Some(file)) => files.push(file),
            Ok(None) => {}
            Err(error) => {
                first_error.get_or_insert(error);
            }
        }
    }

    if let Some(error) = first_error {
        return Err(error);
    }

    Ok(files)
}

async fn render_target_file(
    context: &Context,
    graph: &Graph,
    label: &Label,
) -> Result<Option<File>, ApplicationError> {
    let _permit = context.job_semaphore().acquire().await?;

    if context.is_failed() {
        return Ok(None);
    }

    let contents = render_target(graph, label).inspect_err(|_| context.fail())?;
    let settings = graph.settings();
    let file = target_file(settings, label);

    context
        .target_files()
        .entry(
            label
                .toolchain()
                .unwrap_or_else(|| settings.default_toolchain())
                .clone(),
        )
        .or_default()
        .push(file.clone());

    Ok(Some((file, contents)))
}

async fn render_runtime_deps(
    context: &Context,
    graph: &Graph,
    path: &Path,
) -> Result<Vec<File>, ApplicationError> {
    let mut source = String::new();

    context
        .application()
        .file_system()
        .read_file_to_string(path, &mut source)
        .await?;

    let settings = graph.settings();
    let mut files = vec![];

    for line in source.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let label = parse_label(line, &SourceDir::root(), Some(settings.default_toolchain()))?;
        let target = graph
            .target(&label)
            .ok_or_else(|| ResolveError::TargetNotFound(label.clone()))?;
        let resolution = target
            .resolution()
            .ok_or_else(|| ResolveError::TargetNotResolved(label.clone()))?;

        if let Some(output) = main_output(target, resolution) {
            files.push((
                output.value().to_owned() + RUNTIME_DEPS_EXTENSION,
                compute_runtime_deps(graph, &label)?
                    .iter()
                    .map(|(file, _)| file.value().to_owned() + "\n")
                    .collect(),
            ));
        } else {
            debug!(
                context,
                "no runtime dependencies for {}",
                label.user_visible_name(false)
            );
        }
    }

    Ok(files)
}

async fn write_files(
    context: &Context,
    graph: &Graph,
    files: &[File],
) -> Result<(), ApplicationError> {
    let settings = graph.settings();
    let directory = settings
        .root_path()
        .join(settings.build_dir().relative_part());

    try_join_all(
        files
            .iter()
            .map(|(path, contents)| {
                write_file(context, directory.join(path.trim_start_matches("./")), contents)
            }),
    )
    .await?;

    debug!(
        context,
        "wrote {} files into {}",
        files.len(),
        directory.display()
    );

    Ok(())
}

async fn write_file(
    context: &Context,
    path: PathBuf,
    contents: &str,
) -> Result<(), ApplicationError> {
    let file_system = context.application().file_system();

    if let Some(directory) = path.parent() {
        file_system.create_directory(directory).await?;
    }

    file_system.write_file(&path, contents.as_bytes()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        emit::EmitError,
        infrastructure::{FakeConsole, FakeFileSystem},
        ir::OutputFile,
        testing::label,
    };
    use pretty_assertions::assert_eq;

    const DESCRIPTION_PATH: &str = "/src/BUILD.json";

    fn description(targets: &str) -> String {
        format!(
            r#"{{
                "build_settings": {{
                    "root_path": "/src",
                    "build_dir": "//out/Debug/",
                    "default_toolchain": "//toolchain:default"
                }},
                "toolchains": [{{
                    "label": "//toolchain:default",
                    "tools": {{
                        "cc": {{
                            "command": "cc -c {{{{source}}}} -o {{{{output}}}}",
                            "outputs": ["{{{{source_out_dir}}}}/{{{{source_name_part}}}}.o"]
                        }},
                        "link": {{
                            "command": "cc -o {{{{output}}}} {{{{inputs}}}}",
                            "outputs": ["{{{{root_out_dir}}}}/{{{{target_output_name}}}}"]
                        }},
                        "stamp": {{ "command": "touch {{{{output}}}}" }}
                    }}
                }}],
                "targets": {}
            }}"#,
            targets
        )
    }

    async fn run(
        targets: &str,
        options: Options,
        extra_files: &[(&str, &str)],
    ) -> (Result<(), ApplicationError>, FakeFileSystem, FakeConsole) {
        let source = description(targets);
        let file_system = FakeFileSystem::new(
            [(DESCRIPTION_PATH, source.as_str())]
                .into_iter()
                .chain(extra_files.iter().copied()),
        );
        let console = FakeConsole::new();
        let context = Arc::new(ApplicationContext::new(
            console.clone(),
            file_system.clone(),
        ));

        (
            generate(&context, Path::new(DESCRIPTION_PATH), options).await,
            file_system,
            console,
        )
    }

    fn written_paths(files: &std::collections::BTreeMap<PathBuf, String>) -> Vec<String> {
        files
            .keys()
            .map(|path| path.display().to_string())
            .filter(|path| path != DESCRIPTION_PATH)
            .collect()
    }

    #[tokio::test]
    async fn write_build_files() {
        let (result, file_system, console) = run(
            r#"[{"label": "//foo:bar", "type": "executable", "sources": ["main.c"]}]"#,
            Default::default(),
            &[],
        )
        .await;

        result.unwrap();

        let files = file_system.files().await;

        assert_eq!(
            written_paths(&files),
            vec![
                "/src/out/Debug/build.ninja",
                "/src/out/Debug/obj/foo/bar.ninja",
                "/src/out/Debug/toolchain.ninja",
            ]
        );
        assert_eq!(
            files[Path::new("/src/out/Debug/build.ninja")],
            "subninja toolchain.ninja\n\nbuild all: phony $\n    ./bar\ndefault all\n"
        );
        assert!(
            files[Path::new("/src/out/Debug/toolchain.ninja")]
                .ends_with("\nsubninja obj/foo/bar.ninja\n")
        );
        assert!(
            files[Path::new("/src/out/Debug/obj/foo/bar.ninja")]
                .contains("build obj/foo/main.o: cc ../../foo/main.c\n")
        );
        assert!(
            console
                .stdout()
                .await
                .starts_with("Done. Made 1 targets from 1 toolchains in ")
        );
    }

    #[tokio::test]
    async fn write_nothing_on_check() {
        let (result, file_system, console) = run(
            r#"[{"label": "//foo:bar", "type": "executable", "sources": ["main.c"]}]"#,
            Options {
                check: true,
                ..Default::default()
            },
            &[],
        )
        .await;

        result.unwrap();

        assert_eq!(written_paths(&file_system.files().await), Vec::<String>::new());
        assert!(console.stdout().await.starts_with("Done. Made 1 targets"));
    }

    #[tokio::test]
    async fn write_nothing_on_duplicate_object_files() {
        let (result, file_system, _) = run(
            r#"[{"label": "//foo:bar", "type": "executable", "sources": ["x.c", "x.c"]}]"#,
            Default::default(),
            &[],
        )
        .await;

        assert_eq!(
            result,
            Err(EmitError::DuplicateObjectFile(
                label("//foo:bar"),
                OutputFile::new("obj/foo/x.o")
            )
            .into())
        );
        assert_eq!(written_paths(&file_system.files().await), Vec::<String>::new());
    }

    #[tokio::test]
    async fn fail_on_undefined_dependency() {
        let (result, file_system, _) = run(
            r#"[{"label": "//foo:bar", "type": "group", "deps": [":missing"]}]"#,
            Default::default(),
            &[],
        )
        .await;

        assert!(matches!(result, Err(ApplicationError::Builder(_))));
        assert_eq!(written_paths(&file_system.files().await), Vec::<String>::new());
    }

    #[tokio::test]
    async fn fail_on_missing_description() {
        let file_system = FakeFileSystem::new([]);
        let context = Arc::new(ApplicationContext::new(FakeConsole::new(), file_system));

        assert!(matches!(
            generate(&context, Path::new(DESCRIPTION_PATH), Default::default()).await,
            Err(ApplicationError::Other(_))
        ));
    }

    #[tokio::test]
    async fn write_runtime_deps() {
        let (result, file_system, _) = run(
            r#"[
                {"label": "//foo:bar", "type": "executable", "sources": ["main.c"],
                 "data": ["data.txt"]}
            ]"#,
            Options {
                runtime_deps_list_file: Some("/src/runtime_deps.list".into()),
                ..Default::default()
            },
            &[("/src/runtime_deps.list", "//foo:bar\n")],
        )
        .await;

        result.unwrap();

        assert_eq!(
            file_system.files().await[Path::new("/src/out/Debug/bar.runtime_deps")],
            "./bar\n../../foo/data.txt\n"
        );
    }

    #[tokio::test]
    async fn fail_on_unknown_runtime_deps_label() {
        let (result, _, _) = run(
            "[]",
            Options {
                runtime_deps_list_file: Some("/src/runtime_deps.list".into()),
                ..Default::default()
            },
            &[("/src/runtime_deps.list", "//foo:bar\n")],
        )
        .await;

        assert_eq!(
            result,
            Err(ResolveError::TargetNotFound(label("//foo:bar")).into())
        );
    }

    #[tokio::test]
    async fn show_debug_logs() {
        let (result, _, console) = run(
            "[]",
            Options {
                check: true,
                debug: true,
                ..Default::default()
            },
            &[],
        )
        .await;

        result.unwrap();

        assert!(console.stderr().await.starts_with("kiln: loaded 1 items\n"));
    }
}
