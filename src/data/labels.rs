//! Integer codes for text labels, used to colour and group scatter points.

/// Labels mapped to codes in order of first appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelEncoding {
    /// Distinct labels; `classes[code]` is the label of that code.
    pub classes: Vec<String>,
    /// One code per input label.
    pub codes: Vec<usize>,
}

impl LabelEncoding {
    pub fn encode<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut classes: Vec<String> = Vec::new();
        let codes = labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                match classes.iter().position(|c| c == label) {
                    Some(code) => code,
                    None => {
                        classes.push(label.to_string());
                        classes.len() - 1
                    }
                }
            })
            .collect();
        Self { classes, codes }
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Position of `code` on a colour map, in `0.0..=1.0`.
    ///
    /// Codes are spread evenly from the first to the last class; a single
    /// class maps to the start of the colour map.
    pub fn color_fraction(&self, code: usize) -> f32 {
        let n = self.classes.len();
        if n <= 1 {
            0.0
        } else {
            code as f32 / (n - 1) as f32
        }
    }

    /// Indices of all points carrying `code`, in input order.
    pub fn members(&self, code: usize) -> impl Iterator<Item = usize> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(move |(_, &c)| c == code)
            .map(|(i, _)| i)
    }
}

/// Shorthand for [`LabelEncoding::encode`] returning only the codes.
pub fn encode_labels<S: AsRef<str>>(labels: &[S]) -> Vec<usize> {
    LabelEncoding::encode(labels).codes
}
