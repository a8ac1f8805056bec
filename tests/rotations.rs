use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_abs_diff_eq;

use ndnum::linalg::det;
use ndnum::rotations::{dcm, rodrigues_rotation, wahbas_problem, Quaternion};
use ndnum::{nd, NdArray};

#[test]
fn quaternion_and_dcm_agree() {
    let q = Quaternion::from_euler(0.2, -0.4, 1.1);
    let m = q.to_dcm();
    assert!(dcm::is_valid(&m));
    assert_abs_diff_eq!(dcm::euler_angles(0.2, -0.4, 1.1), m, epsilon = 1e-12);
    assert_abs_diff_eq!(dcm::roll(&m).unwrap(), 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(dcm::pitch(&m).unwrap(), -0.4, epsilon = 1e-12);
    assert_abs_diff_eq!(dcm::yaw(&m).unwrap(), 1.1, epsilon = 1e-12);

    let v = nd![0.3, -1.2, 2.];
    let by_matrix = m.dot(&v.clone().into_shape((3, 1)).unwrap()).unwrap().flatten();
    assert_abs_diff_eq!(q.rotate(&v).unwrap(), by_matrix, epsilon = 1e-12);
    assert_abs_diff_eq!(det(&m).unwrap(), 1., epsilon = 1e-12);
}

#[test]
fn axis_rotations() {
    let x = nd![1., 0., 0.];
    let r = dcm::z_rotation(FRAC_PI_2);
    let rotated = r.dot(&x.clone().into_shape((3, 1)).unwrap()).unwrap().flatten();
    assert_abs_diff_eq!(rotated, nd![0., 1., 0.], epsilon = 1e-15);
    assert_abs_diff_eq!(
        Quaternion::z_rotation(FRAC_PI_2).rotate(&x).unwrap(),
        nd![0., 1., 0.],
        epsilon = 1e-15
    );
    assert_abs_diff_eq!(
        rodrigues_rotation(&nd![0., 0., 1.], FRAC_PI_2, &x).unwrap(),
        nd![0., 1., 0.],
        epsilon = 1e-15
    );

    let axis = nd![1., 1., 0.];
    let m = dcm::euler_axis_angle(&axis, PI / 3.).unwrap();
    let q = Quaternion::from_dcm(&m).unwrap();
    assert_abs_diff_eq!(q.angle_of_rotation(), PI / 3., epsilon = 1e-12);
    let unit = 0.5f64.sqrt();
    assert_abs_diff_eq!(q.axis_of_rotation(), nd![unit, unit, 0.], epsilon = 1e-12);
}

#[test]
fn invalid_inputs() {
    assert!(Quaternion::from_dcm(&nd![[1., 0.], [0., 1.]]).unwrap_err().is_invalid_argument());
    assert!(Quaternion::from_array(&nd![1., 2.]).is_err());
    assert!(Quaternion::identity().rotate(&nd![1., 2.]).is_err());
    assert!(Quaternion::identity().slerp(&Quaternion::identity(), 1.5).is_err());
    assert!(rodrigues_rotation(&nd![0., 1.], 0.1, &nd![1., 0., 0.]).is_err());
    assert!(!dcm::is_valid(&nd![[2., 0., 0.], [0., 1., 0.], [0., 0., 1.]]));
}

#[test]
fn wahba_recovers_attitude() {
    let truth = Quaternion::from_euler(0.1, 0.5, -0.7).to_dcm();
    let vk = nd![[1., 0., 0.], [0., 1., 0.], [0., 0., 1.], [0.6, 0.8, 0.]];
    // observations w = R v, one per row
    let wk = vk.dot(&truth.transpose()).unwrap();
    let weights = nd![1., 2., 0.5, 1.];

    let estimate = wahbas_problem(&wk, &vk, Some(&weights)).unwrap();
    assert_abs_diff_eq!(estimate, truth, epsilon = 1e-10);
    assert!(dcm::is_valid(&estimate));

    let unweighted = wahbas_problem::<f64>(&wk, &vk, None).unwrap();
    assert_abs_diff_eq!(unweighted, truth, epsilon = 1e-10);

    let bad: NdArray<f64> = nd![[1., 0.], [0., 1.]];
    assert!(wahbas_problem(&bad, &bad, None).is_err());
}

#[test]
fn interpolation_endpoints() {
    let a = Quaternion::x_rotation(0.2);
    let b = Quaternion::x_rotation(1.0);
    assert_eq!(a.slerp(&b, 0.).unwrap(), a);
    assert_eq!(a.nlerp(&b, 1.).unwrap(), b);
    let mid = a.slerp(&b, 0.5).unwrap();
    assert_abs_diff_eq!(mid.roll(), 0.6, epsilon = 1e-12);
}
