use crate::errors::{NetworkError, Result};

/// Parallel sequences of input vectors and integer labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    inputs: Vec<Vec<f64>>,
    labels: Vec<usize>,
}

impl Dataset {
    /// Pairs `inputs[i]` with `labels[i]`; both must have the same length.
    pub fn new(inputs: Vec<Vec<f64>>, labels: Vec<usize>) -> Result<Dataset> {
        if inputs.len() != labels.len() {
            return Err(NetworkError::DatasetLengthMismatch {
                inputs: inputs.len(),
                labels: labels.len(),
            });
        }
        Ok(Dataset { inputs, labels })
    }

    pub fn empty() -> Dataset {
        Dataset::default()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Examples in their original order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], usize)> + '_ {
        self.inputs.iter().map(Vec::as_slice).zip(self.labels.iter().copied())
    }

    /// Keeps only the first `len` examples.
    pub fn truncate(&mut self, len: usize) {
        self.inputs.truncate(len);
        self.labels.truncate(len);
    }

    /// Splits into `[0, mid)` and `[mid, len)`. `mid` is clamped to `len`.
    pub fn split_at(mut self, mid: usize) -> (Dataset, Dataset) {
        let mid = mid.min(self.len());
        let tail_inputs = self.inputs.split_off(mid);
        let tail_labels = self.labels.split_off(mid);
        (self, Dataset { inputs: tail_inputs, labels: tail_labels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]],
            vec![0, 1, 2, 3],
        ).unwrap()
    }

    #[test]
    fn test_length_mismatch() {
        let err = Dataset::new(vec![vec![0.0]], vec![0, 1]).unwrap_err();
        assert!(matches!(err, NetworkError::DatasetLengthMismatch { inputs: 1, labels: 2 }));
    }

    #[test]
    fn test_split_at_keeps_order() {
        let (head, tail) = sample().split_at(3);
        assert_eq!(head.labels(), &[0, 1, 2]);
        assert_eq!(tail.labels(), &[3]);
        assert_eq!(tail.inputs(), &[vec![3.0]]);

        let (all, none) = sample().split_at(10);
        assert_eq!(all.len(), 4);
        assert!(none.is_empty());
    }

    #[test]
    fn test_truncate_and_iter() {
        let mut data = sample();
        data.truncate(2);
        let pairs: Vec<(Vec<f64>, usize)> = data.iter().map(|(x, y)| (x.to_vec(), y)).collect();
        assert_eq!(pairs, vec![(vec![0.0], 0), (vec![1.0], 1)]);
    }
}
