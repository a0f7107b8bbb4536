use pckmesh::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

/// Route scanner diagnostics to the test output.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Encode one group the way the format lays it out.
fn encode_group(
    grammar: Grammar,
    vertices: &[(i16, i16, i16)],
    uvs: Option<&[(i16, i16)]>,
    faces: &[u8],
    gap: usize,
) -> Vec<u8> {
    let count = vertices.len() as u8;
    let mut data = grammar.vertex_header(count).to_vec();
    for &(x, y, z) in vertices {
        data.extend(x.to_le_bytes());
        data.extend(y.to_le_bytes());
        data.extend(z.to_le_bytes());
    }
    if let Some(uvs) = uvs {
        data.extend(grammar.uv_header(count));
        for &(u, v) in uvs {
            data.extend(u.to_le_bytes());
            data.extend(v.to_le_bytes());
        }
    }
    data.extend(vec![0x33; gap]);
    data.extend(grammar.face_signature(count));
    data.extend([0u8; 6]);
    for &classification in faces {
        data.extend([classification, 0, 0]);
    }
    data
}

fn sample_file() -> Vec<u8> {
    let mut data = vec![0xEE, 0x00, 0x2B, 0x69, 0x1B, 0x02];
    data.extend(encode_group(
        Grammar::A,
        &[(0, 0, 0), (256, 0, 0), (0, 256, 0), (256, 256, 0)],
        Some(&[(0, 0), (512, 0), (0, 512), (512, 512)]),
        &[0x00, 0x01],
        5,
    ));
    data.extend([0xC4, 0x00, 0x03]);
    data.extend(encode_group(
        Grammar::B,
        &[(-256, 0, 128), (0, -256, 128), (0, 0, -128)],
        None,
        &[0x02],
        0,
    ));
    data
}

#[test]
fn test_parse_recovers_encoded_groups() {
    init_logging();
    let model = parse_bytes(&sample_file()).unwrap();

    let summary: Vec<_> = model
        .groups
        .iter()
        .map(|g| (g.source.grammar, g.source.vertices.len(), g.source.uv_count(), g.source.faces.len()))
        .collect();
    assert_eq!(summary, vec![(Grammar::A, 4, 4, 2), (Grammar::B, 3, 0, 1)]);
    assert!(model.groups[0].source.start < model.groups[1].source.start);

    assert_eq!(model.vertices.len(), 7);
    assert_eq!(model.groups[0].active, vec![[0, 1, 2]]);
    assert_eq!(model.groups[0].inactive, vec![[1, 2, 3]]);
    assert_eq!(model.groups[1].base_index, 4);
    assert_eq!(model.groups[1].active, vec![[4, 5, 6]]);
}

#[test]
fn test_parse_is_idempotent() {
    let data = sample_file();
    assert_eq!(parse_bytes(&data).unwrap(), parse_bytes(&data).unwrap());
}

#[test]
fn test_file_round_trip() {
    init_logging();
    let dir = tempdir().unwrap();
    let pck = dir.path().join("model.pck");
    let obj = dir.path().join("model.obj");
    std::fs::write(&pck, sample_file()).unwrap();

    let model = parse(&pck).unwrap();
    export(&model, false, &obj).unwrap();
    let text = std::fs::read_to_string(&obj).unwrap();

    let expected = "\
v 0 0 0
v 256 0 0
v 0 256 0
v 256 256 0
v -256 0 128
v 0 -256 128
v 0 0 -128
vt 0 0
vt 512 0
vt 0 512
vt 512 512
vt 0 0
vt 0 0
vt 0 0
f 1/1 2/2 3/3
f 5/5 6/6 7/7";
    assert_eq!(text, expected);
}

#[test]
fn test_scaled_export_is_exact() {
    let model = parse_bytes(&sample_file()).unwrap();
    let text = to_obj(&model, true);
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines[1], "v 1 0 0");
    assert_eq!(lines[4], "v -1 0 0.5");
    assert_eq!(lines[8], "vt 2 0");
    assert_eq!(
        text.lines().filter(|l| l.starts_with("vt ")).count(),
        text.lines().filter(|l| l.starts_with("v ")).count()
    );
    // Decoded values are untouched by scaling
    assert_eq!(model.vertices[1], Vertex { x: 256, y: 0, z: 0 });
    assert_eq!(model.scaled_vertices()[1], [1.0, 0.0, 0.0]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(parse(dir.path().join("missing.pck")), Err(Error::Io(_))));
}

#[test]
fn test_corruption_aborts_whole_parse() {
    init_logging();
    let mut data = sample_file();
    data.extend(Grammar::A.vertex_header(5));
    data.extend([0u8; 10]);

    match parse_bytes(&data) {
        Err(Error::Corrupted { group, .. }) => assert_eq!(group.count, 5),
        other => panic!("expected corruption error, got {other:?}"),
    }
}

#[test]
fn test_missing_face_signature_rejects_file() {
    let mut data = sample_file();
    data.extend(Grammar::B.vertex_header(3));
    data.extend([0u8; 18]);
    data.extend(Grammar::A.face_signature(3));
    data.extend([0u8; 9]);

    assert!(matches!(
        parse_bytes(&data),
        Err(Error::FacePatternNotFound { grammar: Grammar::B, .. })
    ));
}

#[test]
fn test_inspect_pck_json() {
    let dir = tempdir().unwrap();
    let pck = dir.path().join("model.pck");
    std::fs::write(&pck, sample_file()).unwrap();

    let info = inspect_pck(&pck).unwrap();
    assert_eq!(info.group_count, 2);
    assert_eq!(info.total_vertices, 7);
    assert_eq!(info.total_active_faces, 2);
    assert_eq!(info.total_inactive_faces, 1);
    assert_eq!(info.groups[1].grammar, "pattern B");
    assert!(info.groups[1].uvs.is_none());

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["groups"][0]["uv_count"], 4);
}
