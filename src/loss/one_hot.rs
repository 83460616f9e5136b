/// One output unit per class; the label is the index of the strongest unit.
pub struct OneHot;

impl OneHot {
    /// 1.0 for the unit matching `label`, 0.0 everywhere else.
    pub fn target(unit: usize, label: usize) -> f64 {
        if unit == label { 1.0 } else { 0.0 }
    }

    /// Index of the maximum activation. Ties go to the first unit in layer order.
    pub fn predict(outputs: &[f64]) -> usize {
        let mut best = 0;
        for (i, &a) in outputs.iter().enumerate().skip(1) {
            if a > outputs[best] {
                best = i;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_argmax() {
        assert_eq!(OneHot::predict(&[0.1, 0.7, 0.2]), 1);
    }

    #[test]
    fn test_predict_ties_pick_first() {
        assert_eq!(OneHot::predict(&[0.3, 0.9, 0.9, 0.1]), 1);
        assert_eq!(OneHot::predict(&[0.5, 0.5]), 0);
    }

    #[test]
    fn test_target() {
        let targets: Vec<f64> = (0..3).map(|i| OneHot::target(i, 2)).collect();
        assert_eq!(targets, vec![0.0, 0.0, 1.0]);
    }
}
