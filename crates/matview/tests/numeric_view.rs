//! Integration tests for in-place lane arithmetic.

use matview::math::{Layout, MatrixView, NumericView};
use matview::MatrixError;

// ---------------------------------------------------------------------------
// Element-wise
// ---------------------------------------------------------------------------

#[test]
fn elementwise_ops_apply_in_place() {
    let mut data = vec![10, 20, 30];
    let mut view = NumericView::new(&mut data);
    view.add_elementwise(&[1, 2, 3]).unwrap();
    assert_eq!(view.as_slice(), &[11, 22, 33]);
    view.sub_elementwise(&[1, 2, 3]).unwrap();
    view.mul_elementwise(&[2, 3, 4]).unwrap();
    assert_eq!(view.as_slice(), &[20, 60, 120]);
    view.div_elementwise(&[10, 20, 30]).unwrap();
    assert_eq!(data, vec![2, 3, 4]);
}

#[test]
fn elementwise_ops_chain() {
    let mut data = vec![1.0f64, 2.0];
    NumericView::new(&mut data)
        .add_elementwise(&[1.0, 1.0])
        .unwrap()
        .mul_scalar(0.5)
        .sub_elementwise(&[0.5, 0.5])
        .unwrap();
    assert_eq!(data, vec![0.5, 1.0]);
}

#[test]
fn shorter_operand_is_rejected_without_writes() {
    let mut data = vec![1, 2, 3];
    let mut view = NumericView::new(&mut data);
    let err = view.add_elementwise(&[5, 5]).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::LengthMismatch {
            expected: 3,
            actual: 2
        }
    ));
    assert_eq!(data, vec![1, 2, 3]);
}

#[test]
fn longer_operand_is_rejected() {
    let mut data = vec![1, 2];
    let mut view = NumericView::new(&mut data);
    let result = view.mul_elementwise(&[2, 2, 2]);
    assert!(result.is_err());
    assert_eq!(data, vec![1, 2]);
}

#[test]
fn truncating_zip_keeps_tail() {
    let mut data = vec![1, 2, 3];
    NumericView::new(&mut data).zip_apply_truncating(&[10, 10], |a, b| *a += b);
    assert_eq!(data, vec![11, 12, 3]);
}

#[test]
fn lanes_combine_with_each_other() {
    let mut buffer = vec![1, 2, 3, 4, 5, 6];
    {
        let mut m = MatrixView::new(&mut buffer, 2, 3, Layout::RowMajor).unwrap();
        let mut lanes = m.lanes_mut();
        let first = lanes.next().unwrap();
        let mut second = lanes.next().unwrap();
        second.sub_elementwise(&first).unwrap();
    }
    assert_eq!(buffer, vec![1, 2, 3, 3, 3, 3]);
}

// ---------------------------------------------------------------------------
// Scalar broadcast
// ---------------------------------------------------------------------------

#[test]
fn scalar_operators() {
    let mut data = vec![2, 4, 6];
    let mut view = NumericView::new(&mut data);
    view += 1;
    assert_eq!(view.as_slice(), &[3, 5, 7]);
    view -= 1;
    view *= 3;
    assert_eq!(view.as_slice(), &[6, 12, 18]);
    view /= 6;
    assert_eq!(data, vec![1, 2, 3]);
}

#[test]
fn scalar_methods_chain() {
    let mut data = vec![1.5f32, -2.0];
    NumericView::new(&mut data).add_scalar(0.5).mul_scalar(2.0).div_scalar(4.0);
    assert_eq!(data, vec![1.0, -0.75]);
}

#[test]
fn apply_scalar_with_custom_op() {
    let mut data = vec![3, -7, 5];
    NumericView::new(&mut data).apply_scalar(4, |x, k| x.max(k));
    assert_eq!(data, vec![4, 4, 5]);
}

#[test]
fn subtracting_from_every_lane_touches_each_element_once() {
    for layout in [Layout::RowMajor, Layout::ColumnMajor] {
        let original: Vec<i64> = (0..12).collect();
        let mut buffer = original.clone();
        {
            let mut m = MatrixView::new(&mut buffer, 3, 4, layout).unwrap();
            let lanes = m.dims().lane_count();
            for i in 0..lanes {
                m.slice_by_index(i).sub_scalar(7);
            }
        }
        let expected: Vec<i64> = original.iter().map(|x| x - 7).collect();
        assert_eq!(buffer, expected);
    }
}

#[test]
fn empty_view_is_a_no_op() {
    let mut data: Vec<i32> = Vec::new();
    let mut view = NumericView::new(&mut data);
    view += 3;
    assert!(view.add_elementwise(&[]).is_ok());
    assert!(view.is_empty());
}
