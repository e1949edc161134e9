use protobuf::reflect::EnumDescriptor;
use protobuf_codegen::{Customize, CustomizeCallback};

fn main() {
    println!("cargo:rerun-if-changed=src/protos");

    struct DeriveOrd;

    impl CustomizeCallback for DeriveOrd {
        fn enumeration(&self, _enum_type: &EnumDescriptor) -> Customize {
            Customize::default().before("#[derive(PartialOrd, Ord)]")
        }
    }

    std::fs::create_dir_all("src/protogen").expect("Failed to create protogen directory");

    protobuf_codegen::Codegen::new()
        .pure()
        // All inputs and imports from the inputs must reside in `includes` directories.
        .includes(["src/protos"])
        // Inputs must reside in some of include paths.
        .inputs(
            std::fs::read_dir("src/protos")
                .expect("Failed to read protos directory")
                .map(|f| f.expect("Failed to read proto entry").path()),
        )
        .out_dir("src/protogen")
        .customize_callback(DeriveOrd)
        .run_from_script();
}
