use std::{io::Write, path::Path};

use log::debug;

use crate::{
    cli::Args,
    constants::STDIN_INDICATOR,
    error::{Error, Result},
    ioutils::{read_file, read_from},
    renderer::{render, RenderValues},
};

/// Executes the complete render workflow: read the sample, apply the
/// substitutions, write the result to stdout.
pub fn run(args: Args) -> Result<()> {
    let document = if args.sample == STDIN_INDICATOR {
        debug!("reading sample CR from stdin");
        read_from(std::io::stdin())?
    } else {
        let sample_path = Path::new(&args.sample);
        if !sample_path.exists() {
            return Err(Error::SampleDoesNotExistError { sample_path: args.sample.clone() });
        }
        debug!("reading sample CR from '{}'", args.sample);
        read_file(sample_path)?
    };

    let values = RenderValues {
        release: args.release,
        namespace: args.namespace,
        pg_password: args.pg_password,
        storage_class: args.storage_class,
    };
    debug!("rendering for release '{}' in namespace '{}'", values.release, values.namespace);

    let rendered = render(&document, &values)?;

    // Emit the document exactly; no trailing newline beyond the input's own.
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes()).map_err(Error::IoError)?;
    Ok(())
}
