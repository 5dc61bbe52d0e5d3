//! yt-dlp Python API wrappers.
//!
//! Type-safe bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) `YoutubeDL` parameters.
//!
//! ```no_run
//! use vidl_dl::Extractor;
//! use vidl_dl::dl::{DownloadOptions, YtDlp};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = DownloadOptions {
//!     quiet: Some(true),
//!     ..Default::default()
//! };
//! if let Some(info) = YtDlp.extract_info("https://youtube.com/watch?v=example", &opts)? {
//!     println!("Title: {:?}", info.title);
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::traits::Extractor;
use pyo3::exceptions::PyImportError;
use pyo3::prelude::*;
use pyo3::types::IntoPyDict;
use std::collections::HashMap;

/// Filename templates using `%(field)s` syntax. Key `default` required.
#[derive(Clone, Debug, Default, PartialEq, IntoPyObject)]
pub struct OutputTemplates(pub Option<HashMap<String, String>>);

impl OutputTemplates {
    /// Create with a single default template.
    pub fn simple(default: String) -> Self {
        Self(Some(HashMap::from([("default".to_string(), default)])))
    }

    /// The template used for media files, if set.
    pub fn default_template(&self) -> Option<&str> {
        self.0.as_ref()?.get("default").map(String::as_str)
    }
}

/// yt-dlp configuration passed to `YoutubeDL(params)`.
///
/// Fields left as `None` are passed through as Python `None`, which yt-dlp
/// treats the same as an absent key.
#[derive(Clone, Debug, Default, PartialEq, IntoPyObject)]
pub struct DownloadOptions {
    /// Format selector, e.g. `best[height<=720]`
    pub format: Option<String>,
    pub outtmpl: Option<OutputTemplates>,
    /// Download only the video when the URL also names a playlist
    pub noplaylist: Option<bool>,
    /// Skip items that fail instead of aborting
    pub ignoreerrors: Option<bool>,
    /// Last playlist index to process (1-based, inclusive)
    pub playlistend: Option<u32>,
    /// Print the available formats instead of downloading
    pub listformats: Option<bool>,
    pub quiet: Option<bool>,
    pub no_warnings: Option<bool>,
}

/// Metadata read from the yt-dlp info dict.
///
/// `id` is always present in yt-dlp info dicts; for the rest, missing keys
/// and Python `None` both extract as `None`.
#[derive(Clone, Debug, Default, PartialEq, FromPyObject)]
#[pyo3(from_item_all)]
pub struct VideoInfo {
    /// Video or playlist identifier (required by yt-dlp)
    pub id: String,
    /// Video or playlist title
    #[pyo3(default)]
    pub title: Option<String>,
    /// Length of the video in seconds
    #[pyo3(default)]
    pub duration: Option<f64>,
    /// How many users have watched the video
    #[pyo3(default)]
    pub view_count: Option<i64>,
    /// Video upload date in UTC (YYYYMMDD)
    #[pyo3(default)]
    pub upload_date: Option<String>,
    /// Full name of the video uploader
    #[pyo3(default)]
    pub uploader: Option<String>,
}

/// In-process yt-dlp through the embedded Python interpreter.
#[derive(Clone, Copy, Debug, Default)]
pub struct YtDlp;

impl YtDlp {
    /// Run `f` inside `with YoutubeDL(params) as ydl:`.
    fn with_ydl<T>(
        opts: &DownloadOptions,
        f: impl for<'py> FnOnce(&Bound<'py, PyAny>) -> PyResult<T>,
    ) -> Result<T> {
        Python::attach(|py| {
            let module = py.import("yt_dlp").map_err(|e| import_error(py, e))?;

            let params = opts.clone().into_pyobject(py)?;
            let ydl = module
                .getattr("YoutubeDL")?
                .call1((params,))?
                .call_method0("__enter__")?;

            let result = f(&ydl);

            let exit = ydl.call_method1("__exit__", (py.None(), py.None(), py.None()));

            let value = match result {
                Ok(value) => value,
                Err(e) => {
                    if let Err(exit_err) = exit {
                        tracing::debug!(error = %exit_err, "YoutubeDL.__exit__ failed after an earlier error");
                    }
                    return Err(library_error(py, &module, e));
                }
            };
            exit?;

            Ok(value)
        })
    }
}

impl Extractor for YtDlp {
    fn extract_info(&self, url: &str, opts: &DownloadOptions) -> Result<Option<VideoInfo>> {
        tracing::debug!(url, ?opts, "extract_info");

        Self::with_ydl(opts, |ydl| {
            let kwargs = [("download", false)].into_py_dict(ydl.py())?;
            let info = ydl.call_method("extract_info", (url,), Some(&kwargs))?;

            if info.is_none() {
                return Ok(None);
            }

            info.extract::<VideoInfo>().map(Some)
        })
    }

    fn download(&self, urls: &[&str], opts: &DownloadOptions) -> Result<()> {
        tracing::debug!(?urls, ?opts, "download");

        let retcode = Self::with_ydl(opts, |ydl| {
            ydl.call_method1("download", (urls.to_vec(),))?
                .extract::<i64>()
        })?;

        // Non-zero without an exception means some items were skipped under `ignoreerrors`
        if retcode != 0 {
            tracing::warn!(retcode, "yt-dlp reported errors for some items");
        }

        Ok(())
    }
}

/// Map a failed `import yt_dlp` to [`Error::MissingLibrary`].
fn import_error(py: Python<'_>, err: PyErr) -> Error {
    if err.is_instance_of::<PyImportError>(py) {
        Error::MissingLibrary(err.value(py).to_string())
    } else {
        Error::Python(err)
    }
}

/// Classify errors from yt-dlp's own hierarchy; pass anything else through.
fn library_error(py: Python<'_>, module: &Bound<'_, PyModule>, err: PyErr) -> Error {
    let is_library_error = module
        .getattr("utils")
        .and_then(|utils| utils.getattr("YoutubeDLError"))
        .map(|cls| err.is_instance(py, &cls))
        .unwrap_or(false);

    if is_library_error {
        let error = Error::from_message(err.value(py).to_string());
        tracing::debug!(kind = %error.kind(), "yt-dlp error");
        error
    } else {
        Error::Python(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pyo3::types::PyAnyMethods;
    use std::ffi::CStr;

    /// Compare Python object with dict/list literal using recursive equality.
    #[track_caller]
    fn assert_py_eq(py: Python, py_obj: &Bound<PyAny>, expected: &'static CStr) {
        let py_expected = py.eval(expected, None, None).unwrap();
        assert!(py_obj.eq(&py_expected).unwrap());
    }

    #[test]
    fn output_templates_default() {
        Python::attach(|py| {
            let templates = OutputTemplates::default();
            let py_obj = templates.into_pyobject(py).unwrap();
            assert!(py_obj.is_none());
        });
    }

    #[test]
    fn output_templates_simple() {
        Python::attach(|py| {
            let templates = OutputTemplates::simple("%(title)s.%(ext)s".to_string());
            let py_obj = templates.into_pyobject(py).unwrap();
            assert_py_eq(py, py_obj.as_any(), c"{'default': '%(title)s.%(ext)s'}");
        });
    }

    #[test]
    fn default_template_lookup() {
        let templates = OutputTemplates::simple("%(title)s.%(ext)s".to_string());
        assert_eq!(templates.default_template(), Some("%(title)s.%(ext)s"));
        assert_eq!(OutputTemplates::default().default_template(), None);
    }

    #[test]
    fn download_options_custom() {
        Python::attach(|py| {
            let opts = DownloadOptions {
                format: Some("bestaudio/best".to_string()),
                ignoreerrors: Some(true),
                playlistend: Some(5),
                ..Default::default()
            };
            let py_obj = opts.into_pyobject(py).unwrap();
            assert_py_eq(
                py,
                py_obj.as_any(),
                c"{'format': 'bestaudio/best', 'outtmpl': None, 'noplaylist': None, 'ignoreerrors': True, 'playlistend': 5, 'listformats': None, 'quiet': None, 'no_warnings': None}",
            );
        });
    }

    #[test]
    fn video_info_from_partial_dict() {
        Python::attach(|py| {
            let dict = py
                .eval(c"{'id': 'jNQXAC9IVRw', 'title': 'Me at the zoo', 'duration': 19, 'uploader': None}", None, None)
                .unwrap();
            let info: VideoInfo = dict.extract().unwrap();

            assert_eq!(
                info,
                VideoInfo {
                    id: "jNQXAC9IVRw".to_string(),
                    title: Some("Me at the zoo".to_string()),
                    duration: Some(19.0),
                    ..Default::default()
                }
            );
        });
    }

    #[test]
    fn video_info_from_full_dict() {
        Python::attach(|py| {
            let dict = py
                .eval(
                    c"{'id': 'x', 'title': 't', 'duration': 1.5, 'view_count': 42, 'upload_date': '20050424', 'uploader': 'jawed'}",
                    None,
                    None,
                )
                .unwrap();
            let info: VideoInfo = dict.extract().unwrap();

            assert!(matches!(
                info,
                VideoInfo {
                    duration: Some(d),
                    view_count: Some(42),
                    ..
                } if (d - 1.5).abs() < f64::EPSILON
            ));
            assert_eq!(info.upload_date.as_deref(), Some("20050424"));
            assert_eq!(info.uploader.as_deref(), Some("jawed"));
        });
    }

    #[test]
    fn non_import_errors_pass_through() {
        Python::attach(|py| {
            let err = pyo3::exceptions::PyValueError::new_err("boom");
            assert!(matches!(import_error(py, err), Error::Python(_)));

            let err = PyImportError::new_err("No module named 'yt_dlp'");
            assert!(matches!(import_error(py, err), Error::MissingLibrary(_)));
        });
    }

    /// Stand-in `yt_dlp` module with the parts `YtDlp` touches.
    const STUB_YT_DLP: &CStr = c"
class YoutubeDLError(Exception):
    pass

class DownloadError(YoutubeDLError):
    pass

class _Utils:
    pass

utils = _Utils()
utils.YoutubeDLError = YoutubeDLError
utils.DownloadError = DownloadError

events = []

class YoutubeDL:
    def __init__(self, params):
        self.params = params

    def __enter__(self):
        events.append('enter')
        return self

    def __exit__(self, *exc):
        events.append('exit')
        return False

    def extract_info(self, url, download=True):
        if download:
            raise ValueError('extract_info called with download=True')
        if url == 'unavailable':
            raise DownloadError('ERROR: [youtube] abc: Video unavailable')
        if url == 'crash':
            raise RuntimeError('unexpected')
        if url == 'skipped':
            return None
        return {'id': 'abc', 'title': 't', 'view_count': None}

    def download(self, urls):
        return 1 if self.params.get('ignoreerrors') else 0
";

    fn install_stub_yt_dlp() {
        Python::attach(|py| {
            let module = PyModule::from_code(py, STUB_YT_DLP, c"yt_dlp.py", c"yt_dlp").unwrap();
            py.import("sys")
                .unwrap()
                .getattr("modules")
                .unwrap()
                .set_item("yt_dlp", module)
                .unwrap();
        });
    }

    fn stub_events() -> Vec<String> {
        Python::attach(|py| {
            py.import("yt_dlp")
                .unwrap()
                .getattr("events")
                .unwrap()
                .extract::<Vec<String>>()
                .unwrap()
        })
    }

    /// Single test so the shared stub module and its event log are not raced.
    #[test]
    fn yt_dlp_calls_through_stub_module() {
        install_stub_yt_dlp();
        let opts = DownloadOptions::default();

        let info = YtDlp.extract_info("https://x/watch?v=abc", &opts).unwrap();
        assert_eq!(
            info,
            Some(VideoInfo {
                id: "abc".to_string(),
                title: Some("t".to_string()),
                ..Default::default()
            })
        );

        assert_eq!(YtDlp.extract_info("skipped", &opts).unwrap(), None);

        let err = YtDlp.extract_info("unavailable", &opts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("Video unavailable"), "{err}");

        let err = YtDlp.extract_info("crash", &opts).unwrap_err();
        assert!(matches!(err, Error::Python(_)), "{err:?}");

        // Non-zero return code with ignoreerrors is not a failure
        let playlist = DownloadOptions {
            ignoreerrors: Some(true),
            ..Default::default()
        };
        assert!(YtDlp.download(&["https://x/playlist?list=abc"], &playlist).is_ok());

        // Every call entered and exited the context manager, errors included
        let events = stub_events();
        assert_eq!(events.len(), 10, "{events:?}");
        assert!(
            events
                .chunks(2)
                .all(|pair| pair == ["enter".to_string(), "exit".to_string()]),
            "{events:?}"
        );
    }
}
