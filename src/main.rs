use blade_shprobe as shp;
use std::path::{Path, PathBuf};

/// Project a light-probe image onto spherical harmonics and write back the
/// band-limited reconstruction.
#[derive(argh::FromArgs)]
struct Args {
    /// windowing filter: none, gaussian, hanning or lanczos
    #[argh(option, short = 'f', default = "shp::FilterProfile::Disable")]
    filter: shp::FilterProfile,
    /// SH order
    #[argh(option, default = "shp::SH_ORDER")]
    order: usize,
    /// output path, derived from the input name by default
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,
    /// angular-map probe image
    #[argh(positional)]
    input: PathBuf,
}

/// `probe.hdr` -> `probe-3-g.hdr`
fn output_path(input: &Path, order: usize, filter: shp::FilterProfile) -> PathBuf {
    let mut base = input.to_path_buf();
    if base.extension().map_or(false, |ext| ext == "gz") {
        base.set_extension("");
    }
    base.set_extension("");
    let mut name = base.into_os_string();
    name.push(format!("-{}{}.hdr", order, filter.suffix()));
    PathBuf::from(name)
}

fn run(args: Args) -> Result<(), shp::Error> {
    let params = shp::ProjectionParameters {
        order: args.order,
        filter: args.filter,
    };
    let projector = shp::Projector::new(&params)?;
    let reconstructor = shp::Reconstructor::new(params.order)?;

    let probe = shp::io::load(&args.input)?;
    let sh = projector.project(&probe)?;
    for k in 0..shp::SH_COUNT {
        let c = sh.coefficient(k);
        println!("{:2}: {:9.6} {:9.6} {:9.6}", k, c.x, c.y, c.z);
    }

    let mut rebuilt = shp::ProbeImage::new(probe.width(), probe.depth())?;
    reconstructor.reconstruct_image(&mut rebuilt, &sh)?;
    let output = args
        .output
        .unwrap_or_else(|| output_path(&args.input, params.order, params.filter));
    shp::io::save(&output, &rebuilt)
}

fn main() {
    env_logger::init();
    let args: Args = argh::from_env();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names() {
        use shp::FilterProfile as Fp;
        assert_eq!(
            output_path(Path::new("probes/grace.hdr"), 3, Fp::Disable),
            PathBuf::from("probes/grace-3.hdr")
        );
        assert_eq!(
            output_path(Path::new("grace.hdr"), 3, Fp::Lanczos),
            PathBuf::from("grace-3-l.hdr")
        );
        assert_eq!(
            output_path(Path::new("grace.hdr.gz"), 3, Fp::Gaussian),
            PathBuf::from("grace-3-g.hdr")
        );
        assert_eq!(
            output_path(Path::new("uffizi.exr"), 3, Fp::Hanning),
            PathBuf::from("uffizi-3-h.hdr")
        );
    }
}
