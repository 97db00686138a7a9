//! Builds one record set from one point cloud.

use crate::host::{PointCloud, Primitive};
use crate::particles::ParticleSet;
use crate::util::{Error, Result};

use super::marshal::store_attribute;
use super::{Diagnostic, ExportProfile, RenameTable, Selection, TypeMap};

/// Record set for one target plus the attributes that were left out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeExport {
    pub particles: ParticleSet,
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert every exportable per-point attribute of `cloud` into a channel.
///
/// Attributes are visited in host order. Nothing here aborts: each
/// attribute that cannot be exported leaves a [`Diagnostic`] and the rest
/// carry on. Diagnostics are returned, not logged.
pub fn export_attributes(
    cloud: &dyn PointCloud,
    renames: &RenameTable,
    types: &TypeMap,
    selection: &Selection,
) -> AttributeExport {
    let num_points = cloud.point_count();
    let mut particles = ParticleSet::new(num_points);
    let mut diagnostics = Vec::new();

    for attribute in cloud.attributes() {
        if !attribute.context().is_per_point() || !attribute.is_defined() {
            continue;
        }
        let name = attribute.name();
        let kind = attribute.data_kind();

        let Some(data_type) = types.resolve(kind) else {
            diagnostics.push(Diagnostic::UnsupportedDataKind { attribute: name.to_string(), kind });
            continue;
        };
        if !selection.contains(name) {
            diagnostics.push(Diagnostic::NotSelected { attribute: name.to_string() });
            continue;
        }

        let channel_name = renames.resolve(name);
        let channel = match particles.add_channel(channel_name, data_type) {
            Ok(channel) => channel,
            Err(_) => {
                diagnostics.push(Diagnostic::ChannelCollision {
                    attribute: name.to_string(),
                    channel: channel_name.to_string(),
                });
                continue;
            }
        };

        // empty clouds keep their channels but are never read
        if num_points == 0 {
            continue;
        }
        if let Err(e) = store_attribute(attribute.data(), channel) {
            particles.remove_channel(channel_name);
            diagnostics.push(Diagnostic::MarshalFailed {
                attribute: name.to_string(),
                reason: e.to_string(),
            });
        }
    }

    AttributeExport { particles, diagnostics }
}

/// Export the point cloud `primitive` exposes at `frame`.
///
/// Fails with [`Error::UnsupportedPrimitive`] for any primitive without
/// point-cloud geometry.
pub fn export_primitive(
    primitive: &dyn Primitive,
    frame: i32,
    profile: &ExportProfile,
    selection: &Selection,
) -> Result<AttributeExport> {
    let cloud = primitive
        .point_cloud(frame)
        .ok_or_else(|| Error::UnsupportedPrimitive(primitive.type_name().to_string()))?;
    Ok(export_attributes(cloud, &profile.renames, &profile.types, selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{AttributeArray, AttributeContext, DataKind, MemoryAttribute, MemoryPrimitive};
    use crate::util::{Color4, DataType, Mat4, Vec3};

    fn floats(name: &str, v: &[f32]) -> MemoryAttribute {
        MemoryAttribute::new(name, AttributeArray::Float(v.to_vec()))
    }

    fn abcd() -> MemoryPrimitive {
        MemoryPrimitive::point_cloud(2)
            .with_attribute(floats("A", &[1.0, 2.0]))
            .with_attribute(floats("B", &[3.0, 4.0]))
            .with_attribute(floats("C", &[5.0, 6.0]))
            .with_attribute(floats("D", &[7.0, 8.0]))
    }

    #[test]
    fn test_selection_filter() {
        let cloud = abcd();
        let sel = Selection::from_names(["A", "C"]);
        let out = export_attributes(&cloud, &RenameTable::new(), &TypeMap::new(), &sel);

        assert_eq!(out.particles.channel_names(), ["A", "C"]);
        let skipped: Vec<&str> = out.diagnostics.iter().map(Diagnostic::attribute).collect();
        assert_eq!(skipped, ["B", "D"]);
        assert!(out
            .diagnostics
            .iter()
            .all(|d| matches!(d, Diagnostic::NotSelected { .. })));
    }

    #[test]
    fn test_rename() {
        let cloud = MemoryPrimitive::point_cloud(1)
            .with_attribute(MemoryAttribute::new(
                "PointPosition",
                AttributeArray::Vector3(vec![Vec3::new(1.0, 2.0, 3.0)]),
            ))
            .with_attribute(floats("Foo", &[0.5]));
        let renames = RenameTable::from_pairs([("PointPosition", "position")]);
        let out = export_attributes(&cloud, &renames, &TypeMap::new(), &Selection::all());

        assert_eq!(out.particles.channel_names(), ["position", "Foo"]);
        let p = out.particles.channel("position").unwrap();
        assert_eq!(p.data_type(), DataType::FLOAT3);
        assert_eq!(p.float_row(0).unwrap(), [1.0, 2.0, 3.0]);
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn test_zero_points() {
        // values present on the host must not be read for an empty cloud
        let cloud = MemoryPrimitive::point_cloud(0)
            .with_attribute(floats("Size", &[1.0, 2.0]))
            .with_attribute(MemoryAttribute::new("ID", AttributeArray::Int(vec![])))
            .with_attribute(MemoryAttribute::new("Color", AttributeArray::Color4(vec![])));
        let out = export_attributes(&cloud, &RenameTable::new(), &TypeMap::new(), &Selection::all());

        assert_eq!(out.particles.num_particles(), 0);
        assert_eq!(out.particles.num_channels(), 3);
        assert!(out.particles.channels().all(|c| c.num_rows() == 0));
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn test_unsupported_kind() {
        let cloud = MemoryPrimitive::point_cloud(1)
            .with_attribute(floats("A", &[1.0]))
            .with_attribute(MemoryAttribute::new("Xform", AttributeArray::Matrix4(vec![Mat4::IDENTITY])))
            .with_attribute(floats("B", &[2.0]));
        let out = export_attributes(&cloud, &RenameTable::new(), &TypeMap::new(), &Selection::all());

        assert_eq!(out.particles.channel_names(), ["A", "B"]);
        assert_eq!(
            out.diagnostics,
            [Diagnostic::UnsupportedDataKind { attribute: "Xform".into(), kind: DataKind::Matrix4 }]
        );
        assert_eq!(out.particles.channel("B").unwrap().float_row(0).unwrap(), [2.0]);
    }

    #[test]
    fn test_unsupported_kind_reported_even_if_unselected() {
        let cloud = MemoryPrimitive::point_cloud(1)
            .with_attribute(MemoryAttribute::new("Tag", AttributeArray::String(vec!["x".into()])));
        let sel = Selection::from_names(["Other"]);
        let out = export_attributes(&cloud, &RenameTable::new(), &TypeMap::new(), &sel);
        assert!(matches!(out.diagnostics[..], [Diagnostic::UnsupportedDataKind { .. }]));
    }

    #[test]
    fn test_skips_undefined_and_non_point() {
        let cloud = MemoryPrimitive::point_cloud(1)
            .with_attribute(floats("Lazy", &[1.0]).undefined())
            .with_attribute(floats("Global", &[1.0]).with_context(AttributeContext::Object))
            .with_attribute(floats("Size", &[1.0]));
        let out = export_attributes(&cloud, &RenameTable::new(), &TypeMap::new(), &Selection::all());
        assert_eq!(out.particles.channel_names(), ["Size"]);
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn test_rename_collision_keeps_first() {
        let cloud = MemoryPrimitive::point_cloud(1)
            .with_attribute(floats("Size", &[1.0]))
            .with_attribute(floats("Radius", &[9.0]));
        let renames = RenameTable::from_pairs([("Size", "pscale"), ("Radius", "pscale")]);
        let out = export_attributes(&cloud, &renames, &TypeMap::new(), &Selection::all());

        assert_eq!(out.particles.channel("pscale").unwrap().float_row(0).unwrap(), [1.0]);
        assert_eq!(
            out.diagnostics,
            [Diagnostic::ChannelCollision { attribute: "Radius".into(), channel: "pscale".into() }]
        );
    }

    #[test]
    fn test_short_array_removes_channel() {
        let cloud = MemoryPrimitive::point_cloud(2)
            .with_attribute(floats("Short", &[1.0]))
            .with_attribute(floats("Ok", &[1.0, 2.0]));
        let out = export_attributes(&cloud, &RenameTable::new(), &TypeMap::new(), &Selection::all());
        assert_eq!(out.particles.channel_names(), ["Ok"]);
        assert!(matches!(out.diagnostics[..], [Diagnostic::MarshalFailed { .. }]));
    }

    #[test]
    fn test_override_narrows_color() {
        let cloud = MemoryPrimitive::point_cloud(1).with_attribute(MemoryAttribute::new(
            "Color",
            AttributeArray::Color4(vec![Color4::new(0.1, 0.2, 0.3, 0.4)]),
        ));
        let types = TypeMap::new().with_override(DataKind::Color4, DataType::FLOAT3);
        let out = export_attributes(&cloud, &RenameTable::new(), &types, &Selection::all());
        assert_eq!(out.particles.channel("Color").unwrap().float_row(0).unwrap(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_export_primitive_rejects_non_cloud() {
        let mesh = MemoryPrimitive::of_type("polymsh");
        let profile = ExportProfile::for_format(crate::formats::Format::Prt);
        let err = export_primitive(&mesh, 1, &profile, &Selection::all()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedPrimitive(ref t) if t == "polymsh"));
    }
}
