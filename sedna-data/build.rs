use std::env;
use std::fs;
use std::path::Path;

const REGIONS: [&str; 2] = ["norwegian-coast", "north-sea"];
const YEARS: [&str; 3] = ["2021", "2022", "2023"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Stage every effort export into OUT_DIR for include_str. A missing
    // fixture gets a single-record placeholder so the crate still builds
    // from a bare checkout.
    for region in REGIONS {
        for year in YEARS {
            let file_name = format!("effort-{region}-{year}.json");
            let src = Path::new("../fixtures").join(&file_name);
            let dest = Path::new(&out_dir).join(&file_name);
            if src.exists() {
                fs::copy(&src, &dest).unwrap();
            } else {
                fs::write(
                    &dest,
                    format!(
                        "[{{\"Time Range\": \"{year}-06\", \"Lat\": 65.0, \"Lon\": 5.0, \"Apparent Fishing Hours\": 0.0, \"Vessel IDs\": 1}}]"
                    ),
                )
                .unwrap();
            }
            println!("cargo:rerun-if-changed=../fixtures/{file_name}");
        }
    }

    let regions_src = Path::new("../fixtures/regions.csv");
    if regions_src.exists() {
        fs::copy(regions_src, Path::new(&out_dir).join("regions.csv")).unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("regions.csv"),
            "key,name,center_lat,center_lon,zoom\nnorwegian-coast,Norwegian Coast,65.0,5.0,4\n",
        )
        .unwrap();
    }

    let stations_src = Path::new("../fixtures/stations.csv");
    if stations_src.exists() {
        fs::copy(stations_src, Path::new(&out_dir).join("stations.csv")).unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("stations.csv"),
            "name,region,lat,lon,temp_c,status,depth_m,species\nStavanger Marine Station,norwegian-coast,58.8,5.2,8.5,excellent,85,\"Cod, Herring, Mackerel\"\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/regions.csv");
    println!("cargo:rerun-if-changed=../fixtures/stations.csv");
}
