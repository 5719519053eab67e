//! End-to-end icon fixing on a wheel-shaped prefab.

use glam::{Mat4, Vec3};
use kf_config::ConfigNode;
use kf_icon::{
    AvailablePart, BoneWeight, ICON_HIDDEN_TAG, Mesh, Prefab, Renderer, SceneNode, SkinnedMesh,
    Transform, calculate_bounds, fix_catalog,
};

const PART_CFG: &str = "\
PART
{
\tname = KF.WheelMedium
\tKFIconOverride
\t{
\t\tMultiplier = 2
\t\tPivot = wheelPivot
\t\tRotation = 0, 90, 0
\t}
}
";

fn wheel_prefab() -> Prefab {
    let mut prefab = Prefab::new("KF.WheelMedium icon");
    let root = prefab.root();
    let part = prefab.add_child(
        root,
        SceneNode::new("KF.WheelMedium")
            .with_transform(Transform::from_position(Vec3::new(0.3, -0.2, 0.0))),
    );
    let model = prefab.add_child(part, SceneNode::new("model"));
    // Body: 4 x 1 x 1 box.
    prefab.add_child(
        model,
        SceneNode::new("body").with_renderer(Renderer::Static(Mesh::new(vec![
            Vec3::new(-2.0, -0.5, -0.5),
            Vec3::new(2.0, 0.5, 0.5),
        ]))),
    );
    let pivot = prefab.add_child(
        model,
        SceneNode::new("wheelPivot").with_transform(Transform::from_position(Vec3::new(
            0.0, -1.0, 0.0,
        ))),
    );
    // Tire driven by the pivot bone, hidden from the finished icon.
    prefab.add_child(
        model,
        SceneNode::new("tire")
            .with_tag(ICON_HIDDEN_TAG)
            .with_renderer(Renderer::Skinned(SkinnedMesh {
                mesh: Mesh::cube(1.0),
                bones: vec![pivot],
                bind_poses: vec![Mat4::IDENTITY],
                weights: vec![BoneWeight::single(0); 8],
            })),
    );
    prefab
}

#[test]
fn test_wheel_icon_fixed() {
    let doc = ConfigNode::parse(PART_CFG).unwrap();
    let config = doc.node("PART").unwrap().clone();
    let mut parts = vec![
        AvailablePart::new("KF.WheelMedium", config.clone(), wheel_prefab()),
        AvailablePart::new("Squad.WheelMedium", config, wheel_prefab()),
    ];

    assert_eq!(fix_catalog(&mut parts), 1);

    let fixed = &parts[0];
    // Body spans 4 units on X; tire reaches y = -1.5 so height stays below 4.
    assert!((fixed.icon_scale - 4.0).abs() < 1e-5);

    let prefab = &fixed.icon_prefab;
    let primary = prefab.child(prefab.root(), 0).unwrap();
    let node = prefab.node(primary);
    assert!((node.local.scale - Vec3::splat(0.5)).abs().max_element() < 1e-5);
    assert_eq!(node.local.position, Vec3::ZERO);
    assert!((node.local.rotation * Vec3::Z - Vec3::X).length() < 1e-5);

    // Tire geometry is gone, body remains.
    let model = prefab.find_child(primary, "model").unwrap();
    let tire = prefab.find_child(model, "tire").unwrap();
    let body = prefab.find_child(model, "body").unwrap();
    assert!(prefab.node(tire).renderer.is_none());
    assert!(prefab.node(body).renderer.is_some());

    // Remaining geometry now fits the requested size.
    let mut check = prefab.clone();
    let after = calculate_bounds(&mut check).unwrap();
    assert!((after.max_dimension() - 2.0).abs() < 1e-4);

    let untouched = &parts[1];
    assert_eq!(untouched.icon_scale, 1.0);
    assert_eq!(prefab.len(), untouched.icon_prefab.len());
}
