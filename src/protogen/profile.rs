// This file is generated by rust-protobuf 3.7.2. Do not edit
// .proto file is parsed by pure
// @generated

// https://github.com/rust-lang/rust-clippy/issues/702
#![allow(unknown_lints)]
#![allow(clippy::all)]

#![allow(unused_attributes)]
#![cfg_attr(rustfmt, rustfmt::skip)]

#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unused_results)]
#![allow(unused_mut)]

//! Generated file from `profile.proto`

/// Generated files are compatible only with the same version
/// of protobuf runtime.
const _PROTOBUF_VERSION_CHECK: () = ::protobuf::VERSION_3_7_2;

// @@protoc_insertion_point(message:hs.profile.Profile)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Profile {
    // message fields
    // @@protoc_insertion_point(field:hs.profile.Profile.name)
    pub name: ::std::string::String,
    // @@protoc_insertion_point(field:hs.profile.Profile.platform_config)
    pub platform_config: ::std::vec::Vec<profile::PlatformConfig>,
    // @@protoc_insertion_point(field:hs.profile.Profile.layout)
    pub layout: ::protobuf::MessageField<profile::Layout>,
    // special fields
    // @@protoc_insertion_point(special_field:hs.profile.Profile.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Profile {
    fn default() -> &'a Profile {
        <Profile as ::protobuf::Message>::default_instance()
    }
}

impl Profile {
    pub fn new() -> Profile {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(3);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "name",
            |m: &Profile| { &m.name },
            |m: &mut Profile| { &mut m.name },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "platform_config",
            |m: &Profile| { &m.platform_config },
            |m: &mut Profile| { &mut m.platform_config },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, profile::Layout>(
            "layout",
            |m: &Profile| { &m.layout },
            |m: &mut Profile| { &mut m.layout },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Profile>(
            "Profile",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Profile {
    const NAME: &'static str = "Profile";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.name = is.read_string()?;
                },
                18 => {
                    self.platform_config.push(is.read_message()?);
                },
                26 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.layout)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.name.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.name);
        }
        for value in &self.platform_config {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        if let Some(v) = self.layout.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.name.is_empty() {
            os.write_string(1, &self.name)?;
        }
        for v in &self.platform_config {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        };
        if let Some(v) = self.layout.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Profile {
        Profile::new()
    }

    fn clear(&mut self) {
        self.name.clear();
        self.platform_config.clear();
        self.layout.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Profile {
        static instance: Profile = Profile {
            name: ::std::string::String::new(),
            platform_config: ::std::vec::Vec::new(),
            layout: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Profile {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Profile").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Profile {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Profile {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

/// Nested message and enums of message `Profile`
pub mod profile {
    // @@protoc_insertion_point(message:hs.profile.Profile.PlatformConfig)
    #[derive(PartialEq,Clone,Default,Debug)]
    pub struct PlatformConfig {
        // message fields
        // @@protoc_insertion_point(field:hs.profile.Profile.PlatformConfig.platform)
        pub platform: ::protobuf::EnumOrUnknown<Platform>,
        // @@protoc_insertion_point(field:hs.profile.Profile.PlatformConfig.position)
        pub position: i32,
        // special fields
        // @@protoc_insertion_point(special_field:hs.profile.Profile.PlatformConfig.special_fields)
        pub special_fields: ::protobuf::SpecialFields,
    }

    impl<'a> ::std::default::Default for &'a PlatformConfig {
        fn default() -> &'a PlatformConfig {
            <PlatformConfig as ::protobuf::Message>::default_instance()
        }
    }

    impl PlatformConfig {
        pub fn new() -> PlatformConfig {
            ::std::default::Default::default()
        }

        pub(in super) fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
            let mut fields = ::std::vec::Vec::with_capacity(2);
            let mut oneofs = ::std::vec::Vec::with_capacity(0);
            fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
                "platform",
                |m: &PlatformConfig| { &m.platform },
                |m: &mut PlatformConfig| { &mut m.platform },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
                "position",
                |m: &PlatformConfig| { &m.position },
                |m: &mut PlatformConfig| { &mut m.position },
            ));
            ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<PlatformConfig>(
                "Profile.PlatformConfig",
                fields,
                oneofs,
            )
        }
    }

    impl ::protobuf::Message for PlatformConfig {
        const NAME: &'static str = "PlatformConfig";

        fn is_initialized(&self) -> bool {
            true
        }

        fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
            while let Some(tag) = is.read_raw_tag_or_eof()? {
                match tag {
                    8 => {
                        self.platform = is.read_enum_or_unknown()?;
                    },
                    16 => {
                        self.position = is.read_int32()?;
                    },
                    tag => {
                        ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                    },
                };
            }
            ::std::result::Result::Ok(())
        }

        // Compute sizes of nested messages
        #[allow(unused_variables)]
        fn compute_size(&self) -> u64 {
            let mut my_size = 0;
            if self.platform != ::protobuf::EnumOrUnknown::new(Platform::UNKNOWN) {
                my_size += ::protobuf::rt::int32_size(1, self.platform.value());
            }
            if self.position != 0 {
                my_size += ::protobuf::rt::int32_size(2, self.position);
            }
            my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
            self.special_fields.cached_size().set(my_size as u32);
            my_size
        }

        fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
            if self.platform != ::protobuf::EnumOrUnknown::new(Platform::UNKNOWN) {
                os.write_enum(1, ::protobuf::EnumOrUnknown::value(&self.platform))?;
            }
            if self.position != 0 {
                os.write_int32(2, self.position)?;
            }
            os.write_unknown_fields(self.special_fields.unknown_fields())?;
            ::std::result::Result::Ok(())
        }

        fn special_fields(&self) -> &::protobuf::SpecialFields {
            &self.special_fields
        }

        fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
            &mut self.special_fields
        }

        fn new() -> PlatformConfig {
            PlatformConfig::new()
        }

        fn clear(&mut self) {
            self.platform = ::protobuf::EnumOrUnknown::new(Platform::UNKNOWN);
            self.position = 0;
            self.special_fields.clear();
        }

        fn default_instance() -> &'static PlatformConfig {
            static instance: PlatformConfig = PlatformConfig {
                platform: ::protobuf::EnumOrUnknown::from_i32(0),
                position: 0,
                special_fields: ::protobuf::SpecialFields::new(),
            };
            &instance
        }
    }

    impl ::protobuf::MessageFull for PlatformConfig {
        fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| super::file_descriptor().message_by_package_relative_name("Profile.PlatformConfig").unwrap()).clone()
        }
    }

    impl ::std::fmt::Display for PlatformConfig {
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
            ::protobuf::text_format::fmt(self, f)
        }
    }

    impl ::protobuf::reflect::ProtobufValue for PlatformConfig {
        type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
    }

    // @@protoc_insertion_point(message:hs.profile.Profile.Layer)
    #[derive(PartialEq,Clone,Default,Debug)]
    pub struct Layer {
        // message fields
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.thumb_top)
        pub thumb_top: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.thumb_middle)
        pub thumb_middle: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.thumb_bottom)
        pub thumb_bottom: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.index_top)
        pub index_top: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.index_middle)
        pub index_middle: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.middle_top)
        pub middle_top: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.middle_middle)
        pub middle_middle: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.middle_bottom)
        pub middle_bottom: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.ring_top)
        pub ring_top: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.ring_middle)
        pub ring_middle: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.ring_bottom)
        pub ring_bottom: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.pinky_top)
        pub pinky_top: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.pinky_middle)
        pub pinky_middle: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.pinky_bottom)
        pub pinky_bottom: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.left_index_extra)
        pub left_index_extra: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.left_middle_extra)
        pub left_middle_extra: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.left_ring_extra)
        pub left_ring_extra: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.right_index_extra)
        pub right_index_extra: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.right_middle_extra)
        pub right_middle_extra: ::protobuf::MessageField<layer::Action>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layer.right_ring_extra)
        pub right_ring_extra: ::protobuf::MessageField<layer::Action>,
        // special fields
        // @@protoc_insertion_point(special_field:hs.profile.Profile.Layer.special_fields)
        pub special_fields: ::protobuf::SpecialFields,
    }

    impl<'a> ::std::default::Default for &'a Layer {
        fn default() -> &'a Layer {
            <Layer as ::protobuf::Message>::default_instance()
        }
    }

    impl Layer {
        pub fn new() -> Layer {
            ::std::default::Default::default()
        }

        pub(in super) fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
            let mut fields = ::std::vec::Vec::with_capacity(20);
            let mut oneofs = ::std::vec::Vec::with_capacity(0);
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "thumb_top",
                |m: &Layer| { &m.thumb_top },
                |m: &mut Layer| { &mut m.thumb_top },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "thumb_middle",
                |m: &Layer| { &m.thumb_middle },
                |m: &mut Layer| { &mut m.thumb_middle },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "thumb_bottom",
                |m: &Layer| { &m.thumb_bottom },
                |m: &mut Layer| { &mut m.thumb_bottom },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "index_top",
                |m: &Layer| { &m.index_top },
                |m: &mut Layer| { &mut m.index_top },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "index_middle",
                |m: &Layer| { &m.index_middle },
                |m: &mut Layer| { &mut m.index_middle },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "middle_top",
                |m: &Layer| { &m.middle_top },
                |m: &mut Layer| { &mut m.middle_top },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "middle_middle",
                |m: &Layer| { &m.middle_middle },
                |m: &mut Layer| { &mut m.middle_middle },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "middle_bottom",
                |m: &Layer| { &m.middle_bottom },
                |m: &mut Layer| { &mut m.middle_bottom },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "ring_top",
                |m: &Layer| { &m.ring_top },
                |m: &mut Layer| { &mut m.ring_top },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "ring_middle",
                |m: &Layer| { &m.ring_middle },
                |m: &mut Layer| { &mut m.ring_middle },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "ring_bottom",
                |m: &Layer| { &m.ring_bottom },
                |m: &mut Layer| { &mut m.ring_bottom },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "pinky_top",
                |m: &Layer| { &m.pinky_top },
                |m: &mut Layer| { &mut m.pinky_top },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "pinky_middle",
                |m: &Layer| { &m.pinky_middle },
                |m: &mut Layer| { &mut m.pinky_middle },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "pinky_bottom",
                |m: &Layer| { &m.pinky_bottom },
                |m: &mut Layer| { &mut m.pinky_bottom },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "left_index_extra",
                |m: &Layer| { &m.left_index_extra },
                |m: &mut Layer| { &mut m.left_index_extra },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "left_middle_extra",
                |m: &Layer| { &m.left_middle_extra },
                |m: &mut Layer| { &mut m.left_middle_extra },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "left_ring_extra",
                |m: &Layer| { &m.left_ring_extra },
                |m: &mut Layer| { &mut m.left_ring_extra },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "right_index_extra",
                |m: &Layer| { &m.right_index_extra },
                |m: &mut Layer| { &mut m.right_index_extra },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "right_middle_extra",
                |m: &Layer| { &m.right_middle_extra },
                |m: &mut Layer| { &mut m.right_middle_extra },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, layer::Action>(
                "right_ring_extra",
                |m: &Layer| { &m.right_ring_extra },
                |m: &mut Layer| { &mut m.right_ring_extra },
            ));
            ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Layer>(
                "Profile.Layer",
                fields,
                oneofs,
            )
        }
    }

    impl ::protobuf::Message for Layer {
        const NAME: &'static str = "Layer";

        fn is_initialized(&self) -> bool {
            true
        }

        fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
            while let Some(tag) = is.read_raw_tag_or_eof()? {
                match tag {
                    10 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.thumb_top)?;
                    },
                    18 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.thumb_middle)?;
                    },
                    26 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.thumb_bottom)?;
                    },
                    34 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.index_top)?;
                    },
                    42 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.index_middle)?;
                    },
                    50 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.middle_top)?;
                    },
                    58 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.middle_middle)?;
                    },
                    66 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.middle_bottom)?;
                    },
                    74 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.ring_top)?;
                    },
                    82 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.ring_middle)?;
                    },
                    90 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.ring_bottom)?;
                    },
                    98 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.pinky_top)?;
                    },
                    106 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.pinky_middle)?;
                    },
                    114 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.pinky_bottom)?;
                    },
                    122 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.left_index_extra)?;
                    },
                    130 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.left_middle_extra)?;
                    },
                    138 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.left_ring_extra)?;
                    },
                    146 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.right_index_extra)?;
                    },
                    154 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.right_middle_extra)?;
                    },
                    162 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.right_ring_extra)?;
                    },
                    tag => {
                        ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                    },
                };
            }
            ::std::result::Result::Ok(())
        }

        // Compute sizes of nested messages
        #[allow(unused_variables)]
        fn compute_size(&self) -> u64 {
            let mut my_size = 0;
            if let Some(v) = self.thumb_top.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.thumb_middle.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.thumb_bottom.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.index_top.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.index_middle.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.middle_top.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.middle_middle.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.middle_bottom.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.ring_top.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.ring_middle.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.ring_bottom.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.pinky_top.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.pinky_middle.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.pinky_bottom.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.left_index_extra.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.left_middle_extra.as_ref() {
                let len = v.compute_size();
                my_size += 2 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.left_ring_extra.as_ref() {
                let len = v.compute_size();
                my_size += 2 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.right_index_extra.as_ref() {
                let len = v.compute_size();
                my_size += 2 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.right_middle_extra.as_ref() {
                let len = v.compute_size();
                my_size += 2 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.right_ring_extra.as_ref() {
                let len = v.compute_size();
                my_size += 2 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
            self.special_fields.cached_size().set(my_size as u32);
            my_size
        }

        fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
            if let Some(v) = self.thumb_top.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
            }
            if let Some(v) = self.thumb_middle.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
            }
            if let Some(v) = self.thumb_bottom.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
            }
            if let Some(v) = self.index_top.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(4, v, os)?;
            }
            if let Some(v) = self.index_middle.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(5, v, os)?;
            }
            if let Some(v) = self.middle_top.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(6, v, os)?;
            }
            if let Some(v) = self.middle_middle.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(7, v, os)?;
            }
            if let Some(v) = self.middle_bottom.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(8, v, os)?;
            }
            if let Some(v) = self.ring_top.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(9, v, os)?;
            }
            if let Some(v) = self.ring_middle.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(10, v, os)?;
            }
            if let Some(v) = self.ring_bottom.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(11, v, os)?;
            }
            if let Some(v) = self.pinky_top.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(12, v, os)?;
            }
            if let Some(v) = self.pinky_middle.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(13, v, os)?;
            }
            if let Some(v) = self.pinky_bottom.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(14, v, os)?;
            }
            if let Some(v) = self.left_index_extra.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(15, v, os)?;
            }
            if let Some(v) = self.left_middle_extra.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(16, v, os)?;
            }
            if let Some(v) = self.left_ring_extra.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(17, v, os)?;
            }
            if let Some(v) = self.right_index_extra.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(18, v, os)?;
            }
            if let Some(v) = self.right_middle_extra.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(19, v, os)?;
            }
            if let Some(v) = self.right_ring_extra.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(20, v, os)?;
            }
            os.write_unknown_fields(self.special_fields.unknown_fields())?;
            ::std::result::Result::Ok(())
        }

        fn special_fields(&self) -> &::protobuf::SpecialFields {
            &self.special_fields
        }

        fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
            &mut self.special_fields
        }

        fn new() -> Layer {
            Layer::new()
        }

        fn clear(&mut self) {
            self.thumb_top.clear();
            self.thumb_middle.clear();
            self.thumb_bottom.clear();
            self.index_top.clear();
            self.index_middle.clear();
            self.middle_top.clear();
            self.middle_middle.clear();
            self.middle_bottom.clear();
            self.ring_top.clear();
            self.ring_middle.clear();
            self.ring_bottom.clear();
            self.pinky_top.clear();
            self.pinky_middle.clear();
            self.pinky_bottom.clear();
            self.left_index_extra.clear();
            self.left_middle_extra.clear();
            self.left_ring_extra.clear();
            self.right_index_extra.clear();
            self.right_middle_extra.clear();
            self.right_ring_extra.clear();
            self.special_fields.clear();
        }

        fn default_instance() -> &'static Layer {
            static instance: Layer = Layer {
                thumb_top: ::protobuf::MessageField::none(),
                thumb_middle: ::protobuf::MessageField::none(),
                thumb_bottom: ::protobuf::MessageField::none(),
                index_top: ::protobuf::MessageField::none(),
                index_middle: ::protobuf::MessageField::none(),
                middle_top: ::protobuf::MessageField::none(),
                middle_middle: ::protobuf::MessageField::none(),
                middle_bottom: ::protobuf::MessageField::none(),
                ring_top: ::protobuf::MessageField::none(),
                ring_middle: ::protobuf::MessageField::none(),
                ring_bottom: ::protobuf::MessageField::none(),
                pinky_top: ::protobuf::MessageField::none(),
                pinky_middle: ::protobuf::MessageField::none(),
                pinky_bottom: ::protobuf::MessageField::none(),
                left_index_extra: ::protobuf::MessageField::none(),
                left_middle_extra: ::protobuf::MessageField::none(),
                left_ring_extra: ::protobuf::MessageField::none(),
                right_index_extra: ::protobuf::MessageField::none(),
                right_middle_extra: ::protobuf::MessageField::none(),
                right_ring_extra: ::protobuf::MessageField::none(),
                special_fields: ::protobuf::SpecialFields::new(),
            };
            &instance
        }
    }

    impl ::protobuf::MessageFull for Layer {
        fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| super::file_descriptor().message_by_package_relative_name("Profile.Layer").unwrap()).clone()
        }
    }

    impl ::std::fmt::Display for Layer {
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
            ::protobuf::text_format::fmt(self, f)
        }
    }

    impl ::protobuf::reflect::ProtobufValue for Layer {
        type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
    }

    /// Nested message and enums of message `Layer`
    pub mod layer {
        // @@protoc_insertion_point(message:hs.profile.Profile.Layer.AnalogAction)
        #[derive(PartialEq,Clone,Default,Debug)]
        pub struct AnalogAction {
            // message fields
            // @@protoc_insertion_point(field:hs.profile.Profile.Layer.AnalogAction.id)
            pub id: ::protobuf::EnumOrUnknown<analog_action::ID>,
            // @@protoc_insertion_point(field:hs.profile.Profile.Layer.AnalogAction.value)
            pub value: i32,
            // special fields
            // @@protoc_insertion_point(special_field:hs.profile.Profile.Layer.AnalogAction.special_fields)
            pub special_fields: ::protobuf::SpecialFields,
        }

        impl<'a> ::std::default::Default for &'a AnalogAction {
            fn default() -> &'a AnalogAction {
                <AnalogAction as ::protobuf::Message>::default_instance()
            }
        }

        impl AnalogAction {
            pub fn new() -> AnalogAction {
                ::std::default::Default::default()
            }

            pub(in super::super) fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
                let mut fields = ::std::vec::Vec::with_capacity(2);
                let mut oneofs = ::std::vec::Vec::with_capacity(0);
                fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
                    "id",
                    |m: &AnalogAction| { &m.id },
                    |m: &mut AnalogAction| { &mut m.id },
                ));
                fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
                    "value",
                    |m: &AnalogAction| { &m.value },
                    |m: &mut AnalogAction| { &mut m.value },
                ));
                ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<AnalogAction>(
                    "Profile.Layer.AnalogAction",
                    fields,
                    oneofs,
                )
            }
        }

        impl ::protobuf::Message for AnalogAction {
            const NAME: &'static str = "AnalogAction";

            fn is_initialized(&self) -> bool {
                true
            }

            fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
                while let Some(tag) = is.read_raw_tag_or_eof()? {
                    match tag {
                        8 => {
                            self.id = is.read_enum_or_unknown()?;
                        },
                        16 => {
                            self.value = is.read_int32()?;
                        },
                        tag => {
                            ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                        },
                    };
                }
                ::std::result::Result::Ok(())
            }

            // Compute sizes of nested messages
            #[allow(unused_variables)]
            fn compute_size(&self) -> u64 {
                let mut my_size = 0;
                if self.id != ::protobuf::EnumOrUnknown::new(analog_action::ID::NONE) {
                    my_size += ::protobuf::rt::int32_size(1, self.id.value());
                }
                if self.value != 0 {
                    my_size += ::protobuf::rt::int32_size(2, self.value);
                }
                my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
                self.special_fields.cached_size().set(my_size as u32);
                my_size
            }

            fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
                if self.id != ::protobuf::EnumOrUnknown::new(analog_action::ID::NONE) {
                    os.write_enum(1, ::protobuf::EnumOrUnknown::value(&self.id))?;
                }
                if self.value != 0 {
                    os.write_int32(2, self.value)?;
                }
                os.write_unknown_fields(self.special_fields.unknown_fields())?;
                ::std::result::Result::Ok(())
            }

            fn special_fields(&self) -> &::protobuf::SpecialFields {
                &self.special_fields
            }

            fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
                &mut self.special_fields
            }

            fn new() -> AnalogAction {
                AnalogAction::new()
            }

            fn clear(&mut self) {
                self.id = ::protobuf::EnumOrUnknown::new(analog_action::ID::NONE);
                self.value = 0;
                self.special_fields.clear();
            }

            fn default_instance() -> &'static AnalogAction {
                static instance: AnalogAction = AnalogAction {
                    id: ::protobuf::EnumOrUnknown::from_i32(0),
                    value: 0,
                    special_fields: ::protobuf::SpecialFields::new(),
                };
                &instance
            }
        }

        impl ::protobuf::MessageFull for AnalogAction {
            fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
                static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
                descriptor.get(|| super::super::file_descriptor().message_by_package_relative_name("Profile.Layer.AnalogAction").unwrap()).clone()
            }
        }

        impl ::std::fmt::Display for AnalogAction {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::protobuf::text_format::fmt(self, f)
            }
        }

        impl ::protobuf::reflect::ProtobufValue for AnalogAction {
            type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
        }

        /// Nested message and enums of message `AnalogAction`
        pub mod analog_action {
            #[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
            #[derive(PartialOrd, Ord)]
            // @@protoc_insertion_point(enum:hs.profile.Profile.Layer.AnalogAction.ID)
            pub enum ID {
                // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.AnalogAction.ID.NONE)
                NONE = 0,
                // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.AnalogAction.ID.R_STICK_X)
                R_STICK_X = 1,
                // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.AnalogAction.ID.R_STICK_Y)
                R_STICK_Y = 2,
                // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.AnalogAction.ID.SLIDER_LEFT)
                SLIDER_LEFT = 3,
                // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.AnalogAction.ID.SLIDER_RIGHT)
                SLIDER_RIGHT = 4,
            }

            impl ::protobuf::Enum for ID {
                const NAME: &'static str = "ID";

                fn value(&self) -> i32 {
                    *self as i32
                }

                fn from_i32(value: i32) -> ::std::option::Option<ID> {
                    match value {
                        0 => ::std::option::Option::Some(ID::NONE),
                        1 => ::std::option::Option::Some(ID::R_STICK_X),
                        2 => ::std::option::Option::Some(ID::R_STICK_Y),
                        3 => ::std::option::Option::Some(ID::SLIDER_LEFT),
                        4 => ::std::option::Option::Some(ID::SLIDER_RIGHT),
                        _ => ::std::option::Option::None
                    }
                }

                fn from_str(str: &str) -> ::std::option::Option<ID> {
                    match str {
                        "NONE" => ::std::option::Option::Some(ID::NONE),
                        "R_STICK_X" => ::std::option::Option::Some(ID::R_STICK_X),
                        "R_STICK_Y" => ::std::option::Option::Some(ID::R_STICK_Y),
                        "SLIDER_LEFT" => ::std::option::Option::Some(ID::SLIDER_LEFT),
                        "SLIDER_RIGHT" => ::std::option::Option::Some(ID::SLIDER_RIGHT),
                        _ => ::std::option::Option::None
                    }
                }

                const VALUES: &'static [ID] = &[
                    ID::NONE,
                    ID::R_STICK_X,
                    ID::R_STICK_Y,
                    ID::SLIDER_LEFT,
                    ID::SLIDER_RIGHT,
                ];
            }

            impl ::protobuf::EnumFull for ID {
                fn enum_descriptor() -> ::protobuf::reflect::EnumDescriptor {
                    static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::Lazy::new();
                    descriptor.get(|| super::super::super::file_descriptor().enum_by_package_relative_name("Profile.Layer.AnalogAction.ID").unwrap()).clone()
                }

                fn descriptor(&self) -> ::protobuf::reflect::EnumValueDescriptor {
                    let index = *self as usize;
                    Self::enum_descriptor().value_by_index(index)
                }
            }

            impl ::std::default::Default for ID {
                fn default() -> Self {
                    ID::NONE
                }
            }

            impl ID {
                pub(in super::super::super) fn generated_enum_descriptor_data() -> ::protobuf::reflect::GeneratedEnumDescriptorData {
                    ::protobuf::reflect::GeneratedEnumDescriptorData::new::<ID>("Profile.Layer.AnalogAction.ID")
                }
            }
        }

        // @@protoc_insertion_point(message:hs.profile.Profile.Layer.Action)
        #[derive(PartialEq,Clone,Default,Debug)]
        pub struct Action {
            // message oneof groups
            pub action: ::std::option::Option<action::Action>,
            // special fields
            // @@protoc_insertion_point(special_field:hs.profile.Profile.Layer.Action.special_fields)
            pub special_fields: ::protobuf::SpecialFields,
        }

        impl<'a> ::std::default::Default for &'a Action {
            fn default() -> &'a Action {
                <Action as ::protobuf::Message>::default_instance()
            }
        }

        impl Action {
            pub fn new() -> Action {
                ::std::default::Default::default()
            }

            // .hs.profile.Profile.Layer.DigitalAction digital = 1;

            pub fn digital(&self) -> DigitalAction {
                match self.action {
                    ::std::option::Option::Some(action::Action::Digital(v)) => ::protobuf::EnumOrUnknown::enum_value_or_default(&v),
                    _ => DigitalAction::NO_OP,
                }
            }

            pub fn clear_digital(&mut self) {
                self.action = ::std::option::Option::None;
            }

            pub fn has_digital(&self) -> bool {
                match self.action {
                    ::std::option::Option::Some(action::Action::Digital(..)) => true,
                    _ => false,
                }
            }

            // Param is passed by value, moved
            pub fn set_digital(&mut self, v: DigitalAction) {
                self.action = ::std::option::Option::Some(action::Action::Digital(::protobuf::EnumOrUnknown::new(v)))
            }

            // .hs.profile.Profile.Layer.AnalogAction analog = 2;

            pub fn analog(&self) -> &AnalogAction {
                match self.action {
                    ::std::option::Option::Some(action::Action::Analog(ref v)) => v,
                    _ => <AnalogAction as ::protobuf::Message>::default_instance(),
                }
            }

            pub fn clear_analog(&mut self) {
                self.action = ::std::option::Option::None;
            }

            pub fn has_analog(&self) -> bool {
                match self.action {
                    ::std::option::Option::Some(action::Action::Analog(..)) => true,
                    _ => false,
                }
            }

            // Param is passed by value, moved
            pub fn set_analog(&mut self, v: AnalogAction) {
                self.action = ::std::option::Option::Some(action::Action::Analog(v))
            }

            // Mutable pointer to the field.
            pub fn mut_analog(&mut self) -> &mut AnalogAction {
                if let ::std::option::Option::Some(action::Action::Analog(_)) = self.action {
                } else {
                    self.action = ::std::option::Option::Some(action::Action::Analog(AnalogAction::new()));
                }
                match self.action {
                    ::std::option::Option::Some(action::Action::Analog(ref mut v)) => v,
                    _ => panic!(),
                }
            }

            // Take field
            pub fn take_analog(&mut self) -> AnalogAction {
                if self.has_analog() {
                    match self.action.take() {
                        ::std::option::Option::Some(action::Action::Analog(v)) => v,
                        _ => panic!(),
                    }
                } else {
                    AnalogAction::new()
                }
            }

            pub(in super::super) fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
                let mut fields = ::std::vec::Vec::with_capacity(2);
                let mut oneofs = ::std::vec::Vec::with_capacity(1);
                fields.push(::protobuf::reflect::rt::v2::make_oneof_enum_accessors::<_, _>(
                    "digital",
                    |message: &Action| match &message.action {
                        ::std::option::Option::Some(action::Action::Digital(e)) => ::std::option::Option::Some(*e),
                        _ => ::std::option::Option::None,
                    },
                    |message: &mut Action, e: ::protobuf::EnumOrUnknown<DigitalAction>| {
                        message.action = ::std::option::Option::Some(action::Action::Digital(e));
                    },
                    DigitalAction::NO_OP,
                ));
                fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, AnalogAction>(
                    "analog",
                    Action::has_analog,
                    Action::analog,
                    Action::mut_analog,
                    Action::set_analog,
                ));
                oneofs.push(action::Action::generated_oneof_descriptor_data());
                ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Action>(
                    "Profile.Layer.Action",
                    fields,
                    oneofs,
                )
            }
        }

        impl ::protobuf::Message for Action {
            const NAME: &'static str = "Action";

            fn is_initialized(&self) -> bool {
                true
            }

            fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
                while let Some(tag) = is.read_raw_tag_or_eof()? {
                    match tag {
                        8 => {
                            self.action = ::std::option::Option::Some(action::Action::Digital(is.read_enum_or_unknown()?));
                        },
                        18 => {
                            self.action = ::std::option::Option::Some(action::Action::Analog(is.read_message()?));
                        },
                        tag => {
                            ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                        },
                    };
                }
                ::std::result::Result::Ok(())
            }

            // Compute sizes of nested messages
            #[allow(unused_variables)]
            fn compute_size(&self) -> u64 {
                let mut my_size = 0;
                if let ::std::option::Option::Some(ref v) = self.action {
                    match v {
                        &action::Action::Digital(v) => {
                            my_size += ::protobuf::rt::int32_size(1, v.value());
                        },
                        &action::Action::Analog(ref v) => {
                            let len = v.compute_size();
                            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                        },
                    };
                }
                my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
                self.special_fields.cached_size().set(my_size as u32);
                my_size
            }

            fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
                if let ::std::option::Option::Some(ref v) = self.action {
                    match v {
                        &action::Action::Digital(v) => {
                            os.write_enum(1, ::protobuf::EnumOrUnknown::value(&v))?;
                        },
                        &action::Action::Analog(ref v) => {
                            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
                        },
                    };
                }
                os.write_unknown_fields(self.special_fields.unknown_fields())?;
                ::std::result::Result::Ok(())
            }

            fn special_fields(&self) -> &::protobuf::SpecialFields {
                &self.special_fields
            }

            fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
                &mut self.special_fields
            }

            fn new() -> Action {
                Action::new()
            }

            fn clear(&mut self) {
                self.action = ::std::option::Option::None;
                self.action = ::std::option::Option::None;
                self.special_fields.clear();
            }

            fn default_instance() -> &'static Action {
                static instance: Action = Action {
                    action: ::std::option::Option::None,
                    special_fields: ::protobuf::SpecialFields::new(),
                };
                &instance
            }
        }

        impl ::protobuf::MessageFull for Action {
            fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
                static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
                descriptor.get(|| super::super::file_descriptor().message_by_package_relative_name("Profile.Layer.Action").unwrap()).clone()
            }
        }

        impl ::std::fmt::Display for Action {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::protobuf::text_format::fmt(self, f)
            }
        }

        impl ::protobuf::reflect::ProtobufValue for Action {
            type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
        }

        /// Nested message and enums of message `Action`
        pub mod action {

            #[derive(Clone,PartialEq,Debug)]
            #[non_exhaustive]
            // @@protoc_insertion_point(oneof:hs.profile.Profile.Layer.Action.action)
            pub enum Action {
                // @@protoc_insertion_point(oneof_field:hs.profile.Profile.Layer.Action.digital)
                Digital(::protobuf::EnumOrUnknown<super::DigitalAction>),
                // @@protoc_insertion_point(oneof_field:hs.profile.Profile.Layer.Action.analog)
                Analog(super::AnalogAction),
            }

            impl ::protobuf::Oneof for Action {
            }

            impl ::protobuf::OneofFull for Action {
                fn descriptor() -> ::protobuf::reflect::OneofDescriptor {
                    static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::OneofDescriptor> = ::protobuf::rt::Lazy::new();
                    descriptor.get(|| <super::Action as ::protobuf::MessageFull>::descriptor().oneof_by_name("action").unwrap()).clone()
                }
            }

            impl Action {
                pub(in super::super::super) fn generated_oneof_descriptor_data() -> ::protobuf::reflect::GeneratedOneofDescriptorData {
                    ::protobuf::reflect::GeneratedOneofDescriptorData::new::<Action>("action")
                }
            }
        }

        #[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
        #[derive(PartialOrd, Ord)]
        // @@protoc_insertion_point(enum:hs.profile.Profile.Layer.DigitalAction)
        pub enum DigitalAction {
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.NO_OP)
            NO_OP = 0,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.X)
            X = 1,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.CIRCLE)
            CIRCLE = 2,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.TRIANGLE)
            TRIANGLE = 3,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.SQUARE)
            SQUARE = 4,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.L)
            L = 5,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.R)
            R = 6,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.ZL)
            ZL = 7,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.ZR)
            ZR = 8,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.SHARE)
            SHARE = 9,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.OPTIONS)
            OPTIONS = 10,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.HOME)
            HOME = 11,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.CAPTURE)
            CAPTURE = 12,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.D_PAD_UP)
            D_PAD_UP = 13,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.D_PAD_DOWN)
            D_PAD_DOWN = 14,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.D_PAD_LEFT)
            D_PAD_LEFT = 15,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.D_PAD_RIGHT)
            D_PAD_RIGHT = 16,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.R_STICK_UP)
            R_STICK_UP = 17,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.R_STICK_DOWN)
            R_STICK_DOWN = 18,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.R_STICK_LEFT)
            R_STICK_LEFT = 19,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.R_STICK_RIGHT)
            R_STICK_RIGHT = 20,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.SLIDER_LEFT_MIN)
            SLIDER_LEFT_MIN = 21,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.SLIDER_LEFT_MAX)
            SLIDER_LEFT_MAX = 22,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.SLIDER_RIGHT_MIN)
            SLIDER_RIGHT_MIN = 23,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.SLIDER_RIGHT_MAX)
            SLIDER_RIGHT_MAX = 24,
            // @@protoc_insertion_point(enum_value:hs.profile.Profile.Layer.DigitalAction.MOD)
            MOD = 25,
        }

        impl ::protobuf::Enum for DigitalAction {
            const NAME: &'static str = "DigitalAction";

            fn value(&self) -> i32 {
                *self as i32
            }

            fn from_i32(value: i32) -> ::std::option::Option<DigitalAction> {
                match value {
                    0 => ::std::option::Option::Some(DigitalAction::NO_OP),
                    1 => ::std::option::Option::Some(DigitalAction::X),
                    2 => ::std::option::Option::Some(DigitalAction::CIRCLE),
                    3 => ::std::option::Option::Some(DigitalAction::TRIANGLE),
                    4 => ::std::option::Option::Some(DigitalAction::SQUARE),
                    5 => ::std::option::Option::Some(DigitalAction::L),
                    6 => ::std::option::Option::Some(DigitalAction::R),
                    7 => ::std::option::Option::Some(DigitalAction::ZL),
                    8 => ::std::option::Option::Some(DigitalAction::ZR),
                    9 => ::std::option::Option::Some(DigitalAction::SHARE),
                    10 => ::std::option::Option::Some(DigitalAction::OPTIONS),
                    11 => ::std::option::Option::Some(DigitalAction::HOME),
                    12 => ::std::option::Option::Some(DigitalAction::CAPTURE),
                    13 => ::std::option::Option::Some(DigitalAction::D_PAD_UP),
                    14 => ::std::option::Option::Some(DigitalAction::D_PAD_DOWN),
                    15 => ::std::option::Option::Some(DigitalAction::D_PAD_LEFT),
                    16 => ::std::option::Option::Some(DigitalAction::D_PAD_RIGHT),
                    17 => ::std::option::Option::Some(DigitalAction::R_STICK_UP),
                    18 => ::std::option::Option::Some(DigitalAction::R_STICK_DOWN),
                    19 => ::std::option::Option::Some(DigitalAction::R_STICK_LEFT),
                    20 => ::std::option::Option::Some(DigitalAction::R_STICK_RIGHT),
                    21 => ::std::option::Option::Some(DigitalAction::SLIDER_LEFT_MIN),
                    22 => ::std::option::Option::Some(DigitalAction::SLIDER_LEFT_MAX),
                    23 => ::std::option::Option::Some(DigitalAction::SLIDER_RIGHT_MIN),
                    24 => ::std::option::Option::Some(DigitalAction::SLIDER_RIGHT_MAX),
                    25 => ::std::option::Option::Some(DigitalAction::MOD),
                    _ => ::std::option::Option::None
                }
            }

            fn from_str(str: &str) -> ::std::option::Option<DigitalAction> {
                match str {
                    "NO_OP" => ::std::option::Option::Some(DigitalAction::NO_OP),
                    "X" => ::std::option::Option::Some(DigitalAction::X),
                    "CIRCLE" => ::std::option::Option::Some(DigitalAction::CIRCLE),
                    "TRIANGLE" => ::std::option::Option::Some(DigitalAction::TRIANGLE),
                    "SQUARE" => ::std::option::Option::Some(DigitalAction::SQUARE),
                    "L" => ::std::option::Option::Some(DigitalAction::L),
                    "R" => ::std::option::Option::Some(DigitalAction::R),
                    "ZL" => ::std::option::Option::Some(DigitalAction::ZL),
                    "ZR" => ::std::option::Option::Some(DigitalAction::ZR),
                    "SHARE" => ::std::option::Option::Some(DigitalAction::SHARE),
                    "OPTIONS" => ::std::option::Option::Some(DigitalAction::OPTIONS),
                    "HOME" => ::std::option::Option::Some(DigitalAction::HOME),
                    "CAPTURE" => ::std::option::Option::Some(DigitalAction::CAPTURE),
                    "D_PAD_UP" => ::std::option::Option::Some(DigitalAction::D_PAD_UP),
                    "D_PAD_DOWN" => ::std::option::Option::Some(DigitalAction::D_PAD_DOWN),
                    "D_PAD_LEFT" => ::std::option::Option::Some(DigitalAction::D_PAD_LEFT),
                    "D_PAD_RIGHT" => ::std::option::Option::Some(DigitalAction::D_PAD_RIGHT),
                    "R_STICK_UP" => ::std::option::Option::Some(DigitalAction::R_STICK_UP),
                    "R_STICK_DOWN" => ::std::option::Option::Some(DigitalAction::R_STICK_DOWN),
                    "R_STICK_LEFT" => ::std::option::Option::Some(DigitalAction::R_STICK_LEFT),
                    "R_STICK_RIGHT" => ::std::option::Option::Some(DigitalAction::R_STICK_RIGHT),
                    "SLIDER_LEFT_MIN" => ::std::option::Option::Some(DigitalAction::SLIDER_LEFT_MIN),
                    "SLIDER_LEFT_MAX" => ::std::option::Option::Some(DigitalAction::SLIDER_LEFT_MAX),
                    "SLIDER_RIGHT_MIN" => ::std::option::Option::Some(DigitalAction::SLIDER_RIGHT_MIN),
                    "SLIDER_RIGHT_MAX" => ::std::option::Option::Some(DigitalAction::SLIDER_RIGHT_MAX),
                    "MOD" => ::std::option::Option::Some(DigitalAction::MOD),
                    _ => ::std::option::Option::None
                }
            }

            const VALUES: &'static [DigitalAction] = &[
                DigitalAction::NO_OP,
                DigitalAction::X,
                DigitalAction::CIRCLE,
                DigitalAction::TRIANGLE,
                DigitalAction::SQUARE,
                DigitalAction::L,
                DigitalAction::R,
                DigitalAction::ZL,
                DigitalAction::ZR,
                DigitalAction::SHARE,
                DigitalAction::OPTIONS,
                DigitalAction::HOME,
                DigitalAction::CAPTURE,
                DigitalAction::D_PAD_UP,
                DigitalAction::D_PAD_DOWN,
                DigitalAction::D_PAD_LEFT,
                DigitalAction::D_PAD_RIGHT,
                DigitalAction::R_STICK_UP,
                DigitalAction::R_STICK_DOWN,
                DigitalAction::R_STICK_LEFT,
                DigitalAction::R_STICK_RIGHT,
                DigitalAction::SLIDER_LEFT_MIN,
                DigitalAction::SLIDER_LEFT_MAX,
                DigitalAction::SLIDER_RIGHT_MIN,
                DigitalAction::SLIDER_RIGHT_MAX,
                DigitalAction::MOD,
            ];
        }

        impl ::protobuf::EnumFull for DigitalAction {
            fn enum_descriptor() -> ::protobuf::reflect::EnumDescriptor {
                static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::Lazy::new();
                descriptor.get(|| super::super::file_descriptor().enum_by_package_relative_name("Profile.Layer.DigitalAction").unwrap()).clone()
            }

            fn descriptor(&self) -> ::protobuf::reflect::EnumValueDescriptor {
                let index = *self as usize;
                Self::enum_descriptor().value_by_index(index)
            }
        }

        impl ::std::default::Default for DigitalAction {
            fn default() -> Self {
                DigitalAction::NO_OP
            }
        }

        impl DigitalAction {
            pub(in super::super) fn generated_enum_descriptor_data() -> ::protobuf::reflect::GeneratedEnumDescriptorData {
                ::protobuf::reflect::GeneratedEnumDescriptorData::new::<DigitalAction>("Profile.Layer.DigitalAction")
            }
        }
    }

    // @@protoc_insertion_point(message:hs.profile.Profile.Layout)
    #[derive(PartialEq,Clone,Default,Debug)]
    pub struct Layout {
        // message fields
        // @@protoc_insertion_point(field:hs.profile.Profile.Layout.joystick_threshold)
        pub joystick_threshold: i32,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layout.base)
        pub base: ::protobuf::MessageField<Layer>,
        // @@protoc_insertion_point(field:hs.profile.Profile.Layout.mod_layer)
        pub mod_layer: ::protobuf::MessageField<Layer>,
        // special fields
        // @@protoc_insertion_point(special_field:hs.profile.Profile.Layout.special_fields)
        pub special_fields: ::protobuf::SpecialFields,
    }

    impl<'a> ::std::default::Default for &'a Layout {
        fn default() -> &'a Layout {
            <Layout as ::protobuf::Message>::default_instance()
        }
    }

    impl Layout {
        pub fn new() -> Layout {
            ::std::default::Default::default()
        }

        pub(in super) fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
            let mut fields = ::std::vec::Vec::with_capacity(3);
            let mut oneofs = ::std::vec::Vec::with_capacity(0);
            fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
                "joystick_threshold",
                |m: &Layout| { &m.joystick_threshold },
                |m: &mut Layout| { &mut m.joystick_threshold },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, Layer>(
                "base",
                |m: &Layout| { &m.base },
                |m: &mut Layout| { &mut m.base },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, Layer>(
                "mod_layer",
                |m: &Layout| { &m.mod_layer },
                |m: &mut Layout| { &mut m.mod_layer },
            ));
            ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Layout>(
                "Profile.Layout",
                fields,
                oneofs,
            )
        }
    }

    impl ::protobuf::Message for Layout {
        const NAME: &'static str = "Layout";

        fn is_initialized(&self) -> bool {
            true
        }

        fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
            while let Some(tag) = is.read_raw_tag_or_eof()? {
                match tag {
                    8 => {
                        self.joystick_threshold = is.read_int32()?;
                    },
                    18 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.base)?;
                    },
                    26 => {
                        ::protobuf::rt::read_singular_message_into_field(is, &mut self.mod_layer)?;
                    },
                    tag => {
                        ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                    },
                };
            }
            ::std::result::Result::Ok(())
        }

        // Compute sizes of nested messages
        #[allow(unused_variables)]
        fn compute_size(&self) -> u64 {
            let mut my_size = 0;
            if self.joystick_threshold != 0 {
                my_size += ::protobuf::rt::int32_size(1, self.joystick_threshold);
            }
            if let Some(v) = self.base.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            if let Some(v) = self.mod_layer.as_ref() {
                let len = v.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            }
            my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
            self.special_fields.cached_size().set(my_size as u32);
            my_size
        }

        fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
            if self.joystick_threshold != 0 {
                os.write_int32(1, self.joystick_threshold)?;
            }
            if let Some(v) = self.base.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
            }
            if let Some(v) = self.mod_layer.as_ref() {
                ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
            }
            os.write_unknown_fields(self.special_fields.unknown_fields())?;
            ::std::result::Result::Ok(())
        }

        fn special_fields(&self) -> &::protobuf::SpecialFields {
            &self.special_fields
        }

        fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
            &mut self.special_fields
        }

        fn new() -> Layout {
            Layout::new()
        }

        fn clear(&mut self) {
            self.joystick_threshold = 0;
            self.base.clear();
            self.mod_layer.clear();
            self.special_fields.clear();
        }

        fn default_instance() -> &'static Layout {
            static instance: Layout = Layout {
                joystick_threshold: 0,
                base: ::protobuf::MessageField::none(),
                mod_layer: ::protobuf::MessageField::none(),
                special_fields: ::protobuf::SpecialFields::new(),
            };
            &instance
        }
    }

    impl ::protobuf::MessageFull for Layout {
        fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| super::file_descriptor().message_by_package_relative_name("Profile.Layout").unwrap()).clone()
        }
    }

    impl ::std::fmt::Display for Layout {
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
            ::protobuf::text_format::fmt(self, f)
        }
    }

    impl ::protobuf::reflect::ProtobufValue for Layout {
        type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
    }

    #[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
    #[derive(PartialOrd, Ord)]
    // @@protoc_insertion_point(enum:hs.profile.Profile.Platform)
    pub enum Platform {
        // @@protoc_insertion_point(enum_value:hs.profile.Profile.Platform.UNKNOWN)
        UNKNOWN = 0,
        // @@protoc_insertion_point(enum_value:hs.profile.Profile.Platform.SWITCH)
        SWITCH = 1,
        // @@protoc_insertion_point(enum_value:hs.profile.Profile.Platform.PC)
        PC = 2,
    }

    impl ::protobuf::Enum for Platform {
        const NAME: &'static str = "Platform";

        fn value(&self) -> i32 {
            *self as i32
        }

        fn from_i32(value: i32) -> ::std::option::Option<Platform> {
            match value {
                0 => ::std::option::Option::Some(Platform::UNKNOWN),
                1 => ::std::option::Option::Some(Platform::SWITCH),
                2 => ::std::option::Option::Some(Platform::PC),
                _ => ::std::option::Option::None
            }
        }

        fn from_str(str: &str) -> ::std::option::Option<Platform> {
            match str {
                "UNKNOWN" => ::std::option::Option::Some(Platform::UNKNOWN),
                "SWITCH" => ::std::option::Option::Some(Platform::SWITCH),
                "PC" => ::std::option::Option::Some(Platform::PC),
                _ => ::std::option::Option::None
            }
        }

        const VALUES: &'static [Platform] = &[
            Platform::UNKNOWN,
            Platform::SWITCH,
            Platform::PC,
        ];
    }

    impl ::protobuf::EnumFull for Platform {
        fn enum_descriptor() -> ::protobuf::reflect::EnumDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| super::file_descriptor().enum_by_package_relative_name("Profile.Platform").unwrap()).clone()
        }

        fn descriptor(&self) -> ::protobuf::reflect::EnumValueDescriptor {
            let index = *self as usize;
            Self::enum_descriptor().value_by_index(index)
        }
    }

    impl ::std::default::Default for Platform {
        fn default() -> Self {
            Platform::UNKNOWN
        }
    }

    impl Platform {
        pub(in super) fn generated_enum_descriptor_data() -> ::protobuf::reflect::GeneratedEnumDescriptorData {
            ::protobuf::reflect::GeneratedEnumDescriptorData::new::<Platform>("Profile.Platform")
        }
    }
}

static file_descriptor_proto_data: &'static [u8] = b"\
    \n\rprofile.proto\x12\nhs.profile\"\x9f\x14\n\x07Profile\x12\x12\n\x04na\
    me\x18\x01\x20\x01(\tR\x04name\x12K\n\x0fplatform_config\x18\x02\x20\x03\
    (\x0b2\".hs.profile.Profile.PlatformConfigR\x0eplatformConfig\x122\n\x06\
    layout\x18\x03\x20\x01(\x0b2\x1a.hs.profile.Profile.LayoutR\x06layout\
    \x1af\n\x0ePlatformConfig\x128\n\x08platform\x18\x01\x20\x01(\x0e2\x1c.h\
    s.profile.Profile.PlatformR\x08platform\x12\x1a\n\x08position\x18\x02\
    \x20\x01(\x05R\x08position\x1a\xc8\x10\n\x05Layer\x12=\n\tthumb_top\x18\
    \x01\x20\x01(\x0b2\x20.hs.profile.Profile.Layer.ActionR\x08thumbTop\x12C\
    \n\x0cthumb_middle\x18\x02\x20\x01(\x0b2\x20.hs.profile.Profile.Layer.Ac\
    tionR\x0bthumbMiddle\x12C\n\x0cthumb_bottom\x18\x03\x20\x01(\x0b2\x20.hs\
    .profile.Profile.Layer.ActionR\x0bthumbBottom\x12=\n\tindex_top\x18\x04\
    \x20\x01(\x0b2\x20.hs.profile.Profile.Layer.ActionR\x08indexTop\x12C\n\
    \x0cindex_middle\x18\x05\x20\x01(\x0b2\x20.hs.profile.Profile.Layer.Acti\
    onR\x0bindexMiddle\x12?\n\nmiddle_top\x18\x06\x20\x01(\x0b2\x20.hs.profi\
    le.Profile.Layer.ActionR\tmiddleTop\x12E\n\rmiddle_middle\x18\x07\x20\
    \x01(\x0b2\x20.hs.profile.Profile.Layer.ActionR\x0cmiddleMiddle\x12E\n\r\
    middle_bottom\x18\x08\x20\x01(\x0b2\x20.hs.profile.Profile.Layer.ActionR\
    \x0cmiddleBottom\x12;\n\x08ring_top\x18\t\x20\x01(\x0b2\x20.hs.profile.P\
    rofile.Layer.ActionR\x07ringTop\x12A\n\x0bring_middle\x18\n\x20\x01(\x0b\
    2\x20.hs.profile.Profile.Layer.ActionR\nringMiddle\x12A\n\x0bring_bottom\
    \x18\x0b\x20\x01(\x0b2\x20.hs.profile.Profile.Layer.ActionR\nringBottom\
    \x12=\n\tpinky_top\x18\x0c\x20\x01(\x0b2\x20.hs.profile.Profile.Layer.Ac\
    tionR\x08pinkyTop\x12C\n\x0cpinky_middle\x18\r\x20\x01(\x0b2\x20.hs.prof\
    ile.Profile.Layer.ActionR\x0bpinkyMiddle\x12C\n\x0cpinky_bottom\x18\x0e\
    \x20\x01(\x0b2\x20.hs.profile.Profile.Layer.ActionR\x0bpinkyBottom\x12J\
    \n\x10left_index_extra\x18\x0f\x20\x01(\x0b2\x20.hs.profile.Profile.Laye\
    r.ActionR\x0eleftIndexExtra\x12L\n\x11left_middle_extra\x18\x10\x20\x01(\
    \x0b2\x20.hs.profile.Profile.Layer.ActionR\x0fleftMiddleExtra\x12H\n\x0f\
    left_ring_extra\x18\x11\x20\x01(\x0b2\x20.hs.profile.Profile.Layer.Actio\
    nR\rleftRingExtra\x12L\n\x11right_index_extra\x18\x12\x20\x01(\x0b2\x20.\
    hs.profile.Profile.Layer.ActionR\x0frightIndexExtra\x12N\n\x12right_midd\
    le_extra\x18\x13\x20\x01(\x0b2\x20.hs.profile.Profile.Layer.ActionR\x10r\
    ightMiddleExtra\x12J\n\x10right_ring_extra\x18\x14\x20\x01(\x0b2\x20.hs.\
    profile.Profile.Layer.ActionR\x0erightRingExtra\x1a\xb0\x01\n\x0cAnalogA\
    ction\x129\n\x02id\x18\x01\x20\x01(\x0e2).hs.profile.Profile.Layer.Analo\
    gAction.IDR\x02id\x12\x14\n\x05value\x18\x02\x20\x01(\x05R\x05value\"O\n\
    \x02ID\x12\x08\n\x04NONE\x10\0\x12\r\n\tR_STICK_X\x10\x01\x12\r\n\tR_STI\
    CK_Y\x10\x02\x12\x0f\n\x0bSLIDER_LEFT\x10\x03\x12\x10\n\x0cSLIDER_RIGHT\
    \x10\x04\x1a\x99\x01\n\x06Action\x12C\n\x07digital\x18\x01\x20\x01(\x0e2\
    '.hs.profile.Profile.Layer.DigitalActionH\0R\x07digital\x12@\n\x06analog\
    \x18\x02\x20\x01(\x0b2&.hs.profile.Profile.Layer.AnalogActionH\0R\x06ana\
    logB\x08\n\x06action\"\xf9\x02\n\rDigitalAction\x12\t\n\x05NO_OP\x10\0\
    \x12\x05\n\x01X\x10\x01\x12\n\n\x06CIRCLE\x10\x02\x12\x0c\n\x08TRIANGLE\
    \x10\x03\x12\n\n\x06SQUARE\x10\x04\x12\x05\n\x01L\x10\x05\x12\x05\n\x01R\
    \x10\x06\x12\x06\n\x02ZL\x10\x07\x12\x06\n\x02ZR\x10\x08\x12\t\n\x05SHAR\
    E\x10\t\x12\x0b\n\x07OPTIONS\x10\n\x12\x08\n\x04HOME\x10\x0b\x12\x0b\n\
    \x07CAPTURE\x10\x0c\x12\x0c\n\x08D_PAD_UP\x10\r\x12\x0e\n\nD_PAD_DOWN\
    \x10\x0e\x12\x0e\n\nD_PAD_LEFT\x10\x0f\x12\x0f\n\x0bD_PAD_RIGHT\x10\x10\
    \x12\x0e\n\nR_STICK_UP\x10\x11\x12\x10\n\x0cR_STICK_DOWN\x10\x12\x12\x10\
    \n\x0cR_STICK_LEFT\x10\x13\x12\x11\n\rR_STICK_RIGHT\x10\x14\x12\x13\n\
    \x0fSLIDER_LEFT_MIN\x10\x15\x12\x13\n\x0fSLIDER_LEFT_MAX\x10\x16\x12\x14\
    \n\x10SLIDER_RIGHT_MIN\x10\x17\x12\x14\n\x10SLIDER_RIGHT_MAX\x10\x18\x12\
    \x07\n\x03MOD\x10\x19\x1a\x9e\x01\n\x06Layout\x12-\n\x12joystick_thresho\
    ld\x18\x01\x20\x01(\x05R\x11joystickThreshold\x12-\n\x04base\x18\x02\x20\
    \x01(\x0b2\x19.hs.profile.Profile.LayerR\x04base\x126\n\tmod_layer\x18\
    \x03\x20\x01(\x0b2\x19.hs.profile.Profile.LayerR\x08modLayer\"+\n\x08Pla\
    tform\x12\x0b\n\x07UNKNOWN\x10\0\x12\n\n\x06SWITCH\x10\x01\x12\x06\n\x02\
    PC\x10\x02b\x06proto3\
";

/// `FileDescriptorProto` object which was a source for this generated file
fn file_descriptor_proto() -> &'static ::protobuf::descriptor::FileDescriptorProto {
    static file_descriptor_proto_lazy: ::protobuf::rt::Lazy<::protobuf::descriptor::FileDescriptorProto> = ::protobuf::rt::Lazy::new();
    file_descriptor_proto_lazy.get(|| {
        ::protobuf::Message::parse_from_bytes(file_descriptor_proto_data).unwrap()
    })
}

/// `FileDescriptor` object which allows dynamic access to files
pub fn file_descriptor() -> &'static ::protobuf::reflect::FileDescriptor {
    static generated_file_descriptor_lazy: ::protobuf::rt::Lazy<::protobuf::reflect::GeneratedFileDescriptor> = ::protobuf::rt::Lazy::new();
    static file_descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::FileDescriptor> = ::protobuf::rt::Lazy::new();
    file_descriptor.get(|| {
        let generated_file_descriptor = generated_file_descriptor_lazy.get(|| {
            let mut deps = ::std::vec::Vec::with_capacity(0);
            let mut messages = ::std::vec::Vec::with_capacity(6);
            messages.push(Profile::generated_message_descriptor_data());
            messages.push(profile::PlatformConfig::generated_message_descriptor_data());
            messages.push(profile::Layer::generated_message_descriptor_data());
            messages.push(profile::Layout::generated_message_descriptor_data());
            messages.push(profile::layer::AnalogAction::generated_message_descriptor_data());
            messages.push(profile::layer::Action::generated_message_descriptor_data());
            let mut enums = ::std::vec::Vec::with_capacity(3);
            enums.push(profile::Platform::generated_enum_descriptor_data());
            enums.push(profile::layer::DigitalAction::generated_enum_descriptor_data());
            enums.push(profile::layer::analog_action::ID::generated_enum_descriptor_data());
            ::protobuf::reflect::GeneratedFileDescriptor::new_generated(
                file_descriptor_proto(),
                deps,
                messages,
                enums,
            )
        });
        ::protobuf::reflect::FileDescriptor::new_generated_2(generated_file_descriptor)
    })
}
