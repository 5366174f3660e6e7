use super::*;
use crate::core::{Part, Transform};
use approx::assert_relative_eq;
use glam::Vec3;
use image::{Rgba, RgbaImage};

fn part_node(name: &str, size: Vec2, translation: Vec3) -> Node {
    let mut node = Node::new_part(name, Part::new(size, None));
    node.transform = Transform::from_translation(translation);
    node
}

#[test]
fn test_new_puppet_has_only_root() {
    let puppet = Puppet::new();
    assert_eq!(puppet.node_count(), 1);
    assert!(puppet.node(puppet.root()).is_some());
    assert!(puppet.descendants(puppet.root()).is_empty());
}

#[test]
fn test_add_child_sets_parent_and_order() {
    let mut puppet = Puppet::new();
    let root = puppet.root();
    let a = puppet.add_child(root, Node::new("a")).expect("a");
    let b = puppet.add_child(root, Node::new("b")).expect("b");
    let c = puppet.add_child(a, Node::new("c")).expect("c");

    assert_eq!(puppet.node(root).map(|n| n.children().to_vec()), Some(vec![a, b]));
    assert_eq!(puppet.node(c).and_then(|n| n.parent()), Some(a));
    assert_eq!(puppet.descendants(root), vec![a, c, b]);
}

#[test]
fn test_add_child_rejects_missing_parent_and_duplicate_uuid() {
    let mut puppet = Puppet::new();
    let root = puppet.root();
    assert!(puppet.add_child(999_999_999, Node::new("x")).is_none());

    let node = Node::new("dup");
    let copy = node.clone();
    assert!(puppet.add_child(root, node).is_some());
    assert!(puppet.add_child(root, copy).is_none());
}

#[test]
fn test_remove_node_releases_subtree() {
    let mut puppet = Puppet::new();
    let root = puppet.root();
    let a = puppet.add_child(root, Node::new("a")).expect("a");
    let b = puppet.add_child(a, Node::new("b")).expect("b");
    let c = puppet.add_child(b, Node::new("c")).expect("c");
    let d = puppet.add_child(root, Node::new("d")).expect("d");

    assert_eq!(puppet.remove_node(a), Some(3));
    assert!(!puppet.contains(a));
    assert!(!puppet.contains(b));
    assert!(!puppet.contains(c));
    assert!(puppet.contains(d));
    assert_eq!(puppet.node(root).map(|n| n.children().to_vec()), Some(vec![d]));

    assert_eq!(puppet.remove_node(root), None);
    assert_eq!(puppet.remove_node(a), None);
}

#[test]
fn test_reparent_rejects_cycles() {
    let mut puppet = Puppet::new();
    let root = puppet.root();
    let a = puppet.add_child(root, Node::new("a")).expect("a");
    let b = puppet.add_child(a, Node::new("b")).expect("b");

    assert!(!puppet.reparent(a, b));
    assert!(!puppet.reparent(root, a));
    assert!(puppet.reparent(b, root));
    assert_eq!(puppet.node(b).and_then(|n| n.parent()), Some(root));
    assert!(puppet.node(a).is_some_and(|n| n.children().is_empty()));
}

#[test]
fn test_descendants_handles_deep_chain_without_recursion() {
    let mut puppet = Puppet::new();
    let mut parent = puppet.root();
    for i in 0..50_000 {
        parent = puppet
            .add_child(parent, Node::new(format!("n{i}")))
            .expect("Kette");
    }
    assert_eq!(puppet.descendants(puppet.root()).len(), 50_000);
}

#[test]
fn test_drawable_bounds_follow_parent_chain() {
    let mut puppet = Puppet::new();
    let root = puppet.root();
    let mut group = Node::new("group");
    group.transform = Transform::from_translation(Vec3::new(100.0, 0.0, 0.0));
    let group = puppet.add_child(root, group).expect("group");
    let part = puppet
        .add_child(
            group,
            part_node("p", Vec2::new(10.0, 20.0), Vec3::new(0.0, 50.0, 0.0)),
        )
        .expect("part");

    let bounds = puppet.drawable_bounds(part).expect("bounds");
    assert_relative_eq!(bounds.min.x, 95.0);
    assert_relative_eq!(bounds.max.x, 105.0);
    assert_relative_eq!(bounds.min.y, 40.0);
    assert_relative_eq!(bounds.max.y, 60.0);
    assert!(puppet.drawable_bounds(group).is_none());
}

#[test]
fn test_combined_bounds_unions_descendants_and_origin() {
    let mut puppet = Puppet::new();
    let root = puppet.root();
    puppet.add_child(
        root,
        part_node("a", Vec2::new(2.0, 2.0), Vec3::new(10.0, 10.0, 0.0)),
    );
    puppet.add_child(
        root,
        part_node("b", Vec2::new(2.0, 2.0), Vec3::new(20.0, -10.0, 0.0)),
    );

    let bounds = puppet.combined_bounds(root).expect("bounds");
    assert_relative_eq!(bounds.min.x, 0.0);
    assert_relative_eq!(bounds.max.x, 21.0);
    assert_relative_eq!(bounds.min.y, -11.0);
    assert_relative_eq!(bounds.max.y, 11.0);
}

#[test]
fn test_rescan_orders_parts_back_to_front() {
    let mut puppet = Puppet::new();
    let root = puppet.root();
    let mut ids = Vec::new();
    for (name, z) in [("front", 0.0), ("back", -0.02), ("middle", -0.01)] {
        let mut node = part_node(name, Vec2::ONE, Vec3::ZERO);
        if let Some(p) = node.as_part_mut() {
            p.zsort = z;
        }
        ids.push(puppet.add_child(root, node).expect("part"));
    }

    puppet.rescan();

    assert_eq!(puppet.paint_order(), &[ids[1], ids[2], ids[0]]);
}

#[test]
fn test_populate_texture_slots_dedups_by_content() {
    let mut puppet = Puppet::new();
    let root = puppet.root();
    let red = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
    let blue = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 255]));

    let mut parts = Vec::new();
    for image in [red.clone(), blue, red] {
        let slot = puppet.add_texture(Texture::new(image));
        let node = Node::new_part("p", Part::new(Vec2::ONE, Some(slot)));
        parts.push(puppet.add_child(root, node).expect("part"));
    }
    assert_eq!(puppet.textures().len(), 3);

    assert_eq!(puppet.populate_texture_slots(), 2);

    let slot_of = |id: u32| puppet.node(id).and_then(|n| n.as_part()).and_then(|p| p.texture_slot);
    assert_eq!(slot_of(parts[0]), Some(0));
    assert_eq!(slot_of(parts[1]), Some(1));
    assert_eq!(slot_of(parts[2]), Some(0));
}

#[test]
fn test_populate_texture_slots_keeps_hash_collisions_apart() {
    let mut puppet = Puppet::new();
    let root = puppet.root();
    let images = [
        RgbaImage::from_pixel(1, 1, Rgba([1, 0, 0, 255])),
        RgbaImage::from_pixel(1, 1, Rgba([2, 0, 0, 255])),
        RgbaImage::from_pixel(1, 1, Rgba([1, 0, 0, 255])),
    ];

    let mut parts = Vec::new();
    for image in images {
        let slot = puppet.add_texture(Texture::with_content_hash(image, 42));
        let node = Node::new_part("p", Part::new(Vec2::ONE, Some(slot)));
        parts.push(puppet.add_child(root, node).expect("part"));
    }

    assert_eq!(puppet.populate_texture_slots(), 2);
    let slot_of = |id: u32| puppet.node(id).and_then(|n| n.as_part()).and_then(|p| p.texture_slot);
    assert_eq!(slot_of(parts[0]), Some(0));
    assert_eq!(slot_of(parts[1]), Some(1));
    assert_eq!(slot_of(parts[2]), Some(0));
}

#[test]
fn test_populate_texture_slots_drops_invalid_references() {
    let mut puppet = Puppet::new();
    let root = puppet.root();
    let node = Node::new_part("p", Part::new(Vec2::ONE, Some(7)));
    let id = puppet.add_child(root, node).expect("part");

    assert_eq!(puppet.populate_texture_slots(), 0);
    assert_eq!(
        puppet.node(id).and_then(|n| n.as_part()).and_then(|p| p.texture_slot),
        None
    );
}

#[test]
fn test_removed_parameter_invalidates_weak_reference() {
    let mut puppet = Puppet::new();
    let param = puppet.add_parameter("Head X");
    let weak = Arc::downgrade(&param);
    let uuid = param.uuid;
    drop(param);

    assert!(weak.upgrade().is_some());
    assert!(puppet.remove_parameter(uuid));
    assert!(weak.upgrade().is_none());
    assert!(!puppet.remove_parameter(uuid));
}

#[test]
fn test_find_by_name() {
    let mut puppet = Puppet::new();
    let root = puppet.root();
    let a = puppet.add_child(root, Node::new("arm")).expect("a");
    puppet.add_child(a, Node::new("hand"));
    assert!(puppet.find_by_name("hand").is_some());
    assert_eq!(puppet.find_by_name("Root"), Some(root));
    assert!(puppet.find_by_name("leg").is_none());
}
