use std::fmt::{self, Display, Write as _};
use std::io;

use crate::math::matrix::Matrix;
use crate::prelude::RenderConfig;

fn write_rows<'a, W, T, I, const N: usize>(
    out: &mut W,
    rows: I,
    config: &RenderConfig,
) -> fmt::Result
where
    W: fmt::Write,
    T: Display + 'a,
    I: IntoIterator<Item = &'a [T; N]>,
{
    for (idx, row) in rows.into_iter().enumerate() {
        if idx > 0 {
            out.write_char('\n')?;
        }
        out.write_str(&config.open)?;
        for value in row {
            out.write_str(&config.separator)?;
            match config.precision {
                Some(precision) => write!(out, "{:.*}", precision, value)?,
                None => write!(out, "{}", value)?,
            }
        }
        out.write_str(&config.separator)?;
        out.write_str(&config.close)?;
    }
    Ok(())
}

/// Displays the columns of a matrix, one per line.
struct Columns<'a, T, const R: usize, const C: usize>(&'a Matrix<T, R, C>);

impl<T: Display, const R: usize, const C: usize> Display for Columns<'_, T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = config_for(f);
        write_rows(f, self.0.cols(), &config)
    }
}

fn config_for(f: &fmt::Formatter<'_>) -> RenderConfig {
    RenderConfig {
        precision: f.precision(),
        ..RenderConfig::default()
    }
}

impl<T: Display, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Renders one line per row, each terminated by a newline.
    ///
    /// Fails only if a scalar's `Display` implementation fails.
    pub fn render(&self, config: &RenderConfig) -> Result<String, fmt::Error> {
        let mut out = String::new();
        write_rows(&mut out, self.rows(), config)?;
        out.push('\n');
        Ok(out)
    }

    /// Renders one line per column.
    pub fn render_transpose(&self, config: &RenderConfig) -> Result<String, fmt::Error> {
        let mut out = String::new();
        write_rows(&mut out, self.cols(), config)?;
        out.push('\n');
        Ok(out)
    }

    pub fn write_to<W: io::Write>(&self, writer: &mut W, config: &RenderConfig) -> io::Result<()> {
        let text = self
            .render(config)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        writer.write_all(text.as_bytes())
    }

    pub fn print(&self) {
        println!("{}\n", self);
    }

    pub fn print_t(&self) {
        println!("{}\n", Columns(self));
    }
}

impl<T: Display, const R: usize, const C: usize> Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = config_for(f);
        write_rows(f, self.rows(), &config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_brackets_each_row() {
        let m = Matrix::new([[1, 2], [3, 4]]);
        assert_eq!(m.render(&RenderConfig::default()).unwrap(), "[ 1 2 ]\n[ 3 4 ]\n");
        assert_eq!(m.to_string(), "[ 1 2 ]\n[ 3 4 ]");
    }

    #[test]
    fn transpose_renders_columns() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(
            m.render_transpose(&RenderConfig::default()).unwrap(),
            "[ 1 4 ]\n[ 2 5 ]\n[ 3 6 ]\n"
        );
    }

    #[test]
    fn config_controls_precision_and_delimiters() {
        let m = Matrix::new([[0.5, 1.0 / 3.0]]);
        let config = RenderConfig {
            precision: Some(2),
            separator: ", ".to_string(),
            open: "(".to_string(),
            close: ")".to_string(),
        };
        assert_eq!(m.render(&config).unwrap(), "(, 0.50, 0.33, )\n");
    }

    #[test]
    fn write_to_emits_rendered_text() {
        let m = Matrix::new([[7u8]]);
        let mut buffer = Vec::new();
        m.write_to(&mut buffer, &RenderConfig::default()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[ 7 ]\n");
    }

    #[derive(Clone, Copy)]
    struct Unprintable;

    impl Display for Unprintable {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn failing_scalar_display_is_reported_not_truncated() {
        let m = Matrix::new([[Unprintable, Unprintable]]);
        assert_eq!(m.render(&RenderConfig::default()), Err(fmt::Error));
        assert!(m.render_transpose(&RenderConfig::default()).is_err());
        let mut buffer = Vec::new();
        let err = m
            .write_to(&mut buffer, &RenderConfig::default())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(buffer.is_empty());
    }

    #[test]
    fn display_honors_formatter_precision() {
        let m = Matrix::new([[1.0 / 3.0, 2.0]]);
        assert_eq!(format!("{:.2}", m), "[ 0.33 2.00 ]");
        assert_eq!(format!("{:.1}", Columns(&m)), "[ 0.3 ]\n[ 2.0 ]");
        assert_eq!(format!("{}", Matrix::new([[0.5]])), "[ 0.5 ]");
    }
}
