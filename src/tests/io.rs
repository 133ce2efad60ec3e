use std::{env, fs, path::PathBuf, process};

use crate::{LoadError, Point, io, triangulate};

use super::util;

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("hullsweep-{}-{}", process::id(), name))
}

#[test]
fn read_points() {
    let points = io::read_points(" 1, 2,3.5,\n-4 ".as_bytes()).expect("Read failed");
    assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.5, -4.0)]);
}

#[test]
fn read_points_unpaired() {
    let points = io::read_points("0,0,1,0,1".as_bytes()).expect("Read failed");
    assert_eq!(points, vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
}

#[test]
fn read_points_empty() {
    assert!(io::read_points("".as_bytes()).expect("Read failed").is_empty());
    assert!(io::read_points(" \n\t".as_bytes()).expect("Read failed").is_empty());
}

#[test]
fn read_points_invalid() {
    match io::read_points("1,x,3,4".as_bytes()) {
        Err(LoadError::InvalidNumber { position, token }) => {
            assert_eq!(position, 1);
            assert_eq!(token, "x");
        }
        other => panic!("Expected InvalidNumber, got {:?}", other),
    }

    // a trailing separator leaves an empty token
    match io::read_points("1,2,".as_bytes()) {
        Err(LoadError::InvalidNumber { position, .. }) => assert_eq!(position, 2),
        other => panic!("Expected InvalidNumber, got {:?}", other),
    }
}

#[test]
fn write_triangles() {
    let mut out = Vec::new();
    io::write_triangles(&mut out, &[0, 1, 2, 2, 3, 0]).expect("Write failed");
    assert_eq!(String::from_utf8(out).expect("Not UTF-8"), "0,1,2,2,3,0");

    let mut out = Vec::new();
    io::write_triangles(&mut out, &[]).expect("Write failed");
    assert!(out.is_empty());
}

#[test]
fn files() {
    let input = temp_path("points.txt");
    let output = temp_path("triangles.txt");
    fs::write(&input, "0,0, 1,0, 1,1, 0,1").expect("Write failed");

    let points = io::load_points(&input).expect("Load failed");
    assert_eq!(points, util::points::square());

    let t = triangulate(&points).expect("Triangulation failed");
    io::save_triangles(&output, &t).expect("Save failed");
    let text = fs::read_to_string(&output).expect("Read failed");
    let indices: Vec<usize> = text.split(',').map(|s| s.parse().expect("Not an index")).collect();
    assert_eq!(indices, t.triangles());

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
}

#[test]
fn missing_file() {
    match io::load_points(temp_path("does-not-exist.txt")) {
        Err(LoadError::Io(_)) => {}
        other => panic!("Expected Io, got {:?}", other),
    }
}
