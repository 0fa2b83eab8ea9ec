use std::io::Write;

use crate::error::Result;
use crate::style::{Class, stylesheet};

/// Renderer runtime parameters.
#[derive(Debug, Clone, Default)]
pub struct RendererSettings {
    /// Emitted as `/*banner*/` ahead of the rules when set.
    pub banner: Option<String>,
}

impl RendererSettings {
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }
}

/// Writes stylesheets to any byte sink: a file, a socket, a style tag buffer.
pub struct StylesheetRenderer {
    settings: RendererSettings,
}

impl StylesheetRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    pub fn render<'a>(
        &self,
        writer: &mut impl Write,
        classes: impl IntoIterator<Item = &'a Class>,
    ) -> Result<()> {
        if let Some(banner) = &self.settings.banner {
            write!(writer, "/*{}*/", sanitize_comment(banner))?;
        }
        writer.write_all(stylesheet(classes).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

fn sanitize_comment(text: &str) -> String {
    text.replace("*/", "* /")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::{display, padding};
    use crate::error::StyleError;
    use crate::style::class;
    use std::io;

    #[test]
    fn renders_sheet_with_banner() {
        let a = class(&[padding(2)]);
        let b = class(&[display("grid")]);

        let mut output = Vec::new();
        let renderer = StylesheetRenderer::new(RendererSettings::default().with_banner("weft */"));
        renderer.render(&mut output, [&a, &b, &a]).unwrap();

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.starts_with("/*weft * /*/"));
        assert!(rendered.ends_with(&stylesheet([&b, &a])));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn io_failures_surface_as_errors() {
        let a = class(&[padding(2)]);
        let result = StylesheetRenderer::with_default().render(&mut FailingWriter, [&a]);
        assert!(matches!(result, Err(StyleError::Io(_))));
    }
}
