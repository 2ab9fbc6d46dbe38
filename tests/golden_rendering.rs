use std::fs;
use std::path::PathBuf;

use scorecard::{samples, RendererConfig, ScorecardRenderer};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(format!("{}.sha256", name));
    p
}

#[test]
fn golden_sample_digests_match_fixtures() {
    let renderer = ScorecardRenderer::new(RendererConfig::default());
    let updating = std::env::var("UPDATE_GOLDENS").is_ok();
    let mut checked = 0;

    for (name, state, request) in samples::all() {
        let doc = renderer.render(&state, &request).expect("render sample");
        // Content-addressed: the golden stores only the SHA-256 of the document
        let digest = doc.digest();
        assert_eq!(digest, renderer.render(&state, &request).unwrap().digest());

        let expected_path = golden_path(name);
        if updating {
            fs::create_dir_all("tests/goldens/expected").ok();
            fs::write(&expected_path, &digest).expect("write golden");
            println!("Updated golden: {:?}", expected_path);
            continue;
        }

        if !expected_path.exists() {
            println!(
                "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
                expected_path
            );
            continue;
        }

        let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
        assert_eq!(digest, exp.trim(), "digest mismatch for sample {}", name);
        checked += 1;
    }

    if !updating {
        assert_eq!(checked, samples::all().len(), "every sample needs a committed golden");
    }
}
