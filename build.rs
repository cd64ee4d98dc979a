use gl_generator::generators::{gen_enum_item, gen_parameters, gen_symbol_name, gen_types};
use gl_generator::{Api, Cmd, Fallbacks, Generator, Profile, Registry};
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[path = "build/scan.rs"]
#[allow(dead_code)]
mod scan;

use crate::scan::{Scan, Tag};

/// Extensions bound on top of the 4.6 core profile.
const EXTENSIONS: &[&str] = &[
    "GL_APPLE_client_storage",
    "GL_APPLE_fence",
    "GL_APPLE_vertex_array_object",
    "GL_ARB_bindless_texture",
    "GL_ARB_blend_func_extended",
    "GL_ARB_compute_variable_group_size",
    "GL_ARB_copy_image",
    "GL_ARB_debug_output",
    "GL_ARB_get_program_binary",
    "GL_ARB_invalidate_subdata",
    "GL_ARB_parallel_shader_compile",
    "GL_ARB_sample_locations",
    "GL_ARB_shading_language_include",
    "GL_ARB_sparse_buffer",
    "GL_ARB_sparse_texture",
    "GL_ARB_texture_filter_anisotropic",
    "GL_ARB_texture_rectangle",
    "GL_EXT_convolution",
    "GL_EXT_debug_label",
    "GL_EXT_debug_marker",
    "GL_EXT_direct_state_access",
    "GL_EXT_framebuffer_blit",
    "GL_EXT_framebuffer_multisample",
    "GL_EXT_framebuffer_object",
    "GL_EXT_memory_object",
    "GL_EXT_polygon_offset_clamp",
    "GL_EXT_semaphore",
    "GL_EXT_texture_compression_s3tc",
    "GL_EXT_texture_filter_anisotropic",
    "GL_EXT_texture_sRGB",
    "GL_KHR_blend_equation_advanced",
    "GL_KHR_debug",
    "GL_KHR_parallel_shader_compile",
    "GL_NVX_gpu_memory_info",
    "GL_NV_conservative_raster",
    "GL_NV_texture_barrier",
    "GL_OVR_multiview",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/scan.rs");

    let scan = scan::scan(khronos_api::GL_XML).expect("gl.xml is not well formed");

    let dest = env::var("OUT_DIR").unwrap();
    let file = File::create(&Path::new(&dest).join("gl_bindings.rs")).unwrap();
    let mut file = BufWriter::new(file);

    Registry::new(Api::Gl, (4, 6), Profile::Core, Fallbacks::All, EXTENSIONS)
        .write_bindings(TableGenerator { scan: &scan }, &mut file)
        .unwrap();
}

/// Writes the constants, command ids, metadata tables and the typed
/// wrappers on `Gl`, all indexing one per-context pointer table.
struct TableGenerator<'a> {
    scan: &'a Scan,
}

impl<'a> Generator for TableGenerator<'a> {
    fn write<W>(&self, registry: &Registry, dest: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        let mut cmds: Vec<&Cmd> = registry.cmds.iter().collect();
        cmds.sort_by_key(|cmd| gen_symbol_name(registry.api, &cmd.proto.ident));

        write_header(dest)?;
        write_type_aliases(registry, dest)?;
        write_enums(registry, dest)?;
        write_enum_table(registry, self.scan, dest)?;
        write_command_ids(registry, &cmds, dest)?;
        write_command_table(registry, self.scan, &cmds, dest)?;
        write_wrappers(registry, &cmds, dest)
    }
}

fn write_header<W: Write>(dest: &mut W) -> io::Result<()> {
    writeln!(
        dest,
        r#"
        mod __gl_imports {{
            pub use std::mem;
            pub use std::os::raw;
        }}
    "#
    )
}

fn write_type_aliases<W: Write>(registry: &Registry, dest: &mut W) -> io::Result<()> {
    writeln!(
        dest,
        r#"
        pub mod types {{
            #![allow(non_camel_case_types, non_snake_case, dead_code, missing_copy_implementations)]
    "#
    )?;
    gen_types(registry.api, dest)?;
    writeln!(dest, "}}")
}

fn write_enums<W: Write>(registry: &Registry, dest: &mut W) -> io::Result<()> {
    for enm in &registry.enums {
        gen_enum_item(enm, "types::", dest)?;
    }
    Ok(())
}

/// Registry name of an enum from its binding ident (`_2D` -> `GL_2D`).
fn enum_symbol(ident: &str) -> String {
    format!("GL_{}", ident.trim_start_matches('_'))
}

fn render_requirements(tags: &[Tag]) -> String {
    let mut tags = tags.to_vec();
    tags.sort();
    tags.dedup();
    // Tag orders versions first, lowest first; keep only the lowest.
    let mut seen_version = false;
    tags.retain(|tag| match tag {
        Tag::Version(..) => !std::mem::replace(&mut seen_version, true),
        Tag::Extension(_) => true,
    });
    let items: Vec<String> = tags
        .iter()
        .map(|tag| match tag {
            Tag::Version(major, minor) => format!(
                "crate::gl::Requirement::Version {{ major: {}, minor: {} }}",
                major, minor
            ),
            Tag::Extension(name) => format!("crate::gl::Requirement::Extension({:?})", name),
        })
        .collect();
    format!("&[{}]", items.join(", "))
}

fn write_enum_table<W: Write>(registry: &Registry, scan: &Scan, dest: &mut W) -> io::Result<()> {
    // Values are read back from the emitted constants, casts included.
    let mut rows = Vec::new();
    for enm in &registry.enums {
        let symbol = enum_symbol(&enm.ident);
        let row = format!(
            "crate::gl::EnumInfo {{ name: {:?}, value: {} as u64, requires: {} }},",
            symbol,
            enm.ident,
            render_requirements(scan.tags(&symbol)),
        );
        rows.push((symbol, row));
    }
    rows.sort();

    writeln!(dest, "/// Every bound enum, sorted by registry name.")?;
    writeln!(dest, "pub static ENUMS: [crate::gl::EnumInfo; {}] = [", rows.len())?;
    for (_, row) in &rows {
        writeln!(dest, "    {}", row)?;
    }
    writeln!(dest, "];")
}

fn write_command_ids<W: Write>(registry: &Registry, cmds: &[&Cmd], dest: &mut W) -> io::Result<()> {
    writeln!(dest, "pub const COMMAND_COUNT: usize = {};", cmds.len())?;
    writeln!(dest, "/// One id per bound command, in table order.")?;
    writeln!(dest, "#[allow(non_upper_case_globals, dead_code)]")?;
    writeln!(dest, "pub mod cmd {{")?;
    for (index, cmd) in cmds.iter().enumerate() {
        writeln!(
            dest,
            "    /// `{}`\n    pub const {}: crate::gl::Command = crate::gl::Command({});",
            gen_symbol_name(registry.api, &cmd.proto.ident),
            cmd.proto.ident,
            index,
        )?;
    }
    writeln!(dest, "}}")
}

fn write_command_table<W: Write>(
    registry: &Registry,
    scan: &Scan,
    cmds: &[&Cmd],
    dest: &mut W,
) -> io::Result<()> {
    writeln!(dest, "/// Metadata for every bound command, indexed by `Command`.")?;
    writeln!(dest, "pub static COMMANDS: [crate::gl::CommandInfo; COMMAND_COUNT] = [")?;
    for cmd in cmds {
        let symbol = gen_symbol_name(registry.api, &cmd.proto.ident);
        let fallbacks = scan.fallbacks(&symbol);

        let mut tags = scan.tags(&symbol).to_vec();
        for fallback in &fallbacks {
            tags.extend_from_slice(scan.tags(fallback));
        }

        writeln!(
            dest,
            "    crate::gl::CommandInfo {{ symbol: {:?}, fallbacks: &{:?}, requires: {} }},",
            symbol,
            fallbacks,
            render_requirements(&tags),
        )?;
    }
    writeln!(dest, "];")
}

fn write_wrappers<W: Write>(registry: &Registry, cmds: &[&Cmd], dest: &mut W) -> io::Result<()> {
    writeln!(dest, "#[allow(non_snake_case, unused_variables, dead_code, clippy::unused_unit)]")?;
    writeln!(dest, "impl crate::gl::Gl {{")?;
    for cmd in cmds {
        let ident = &cmd.proto.ident;
        writeln!(
            dest,
            "    /// Calls `{symbol}`. Panics if it was not loaded on this context.
    #[inline]
    pub unsafe fn {ident}(&self, {params}) -> {ret} {{
        let __proc = self.proc_address(cmd::{ident});
        let __result = __gl_imports::mem::transmute::<_, extern \"system\" fn({types}) -> {ret}>(__proc)({args});
        self.after_call(cmd::{ident});
        __result
    }}",
            symbol = gen_symbol_name(registry.api, ident),
            ident = ident,
            params = gen_parameters(cmd, true, true).join(", "),
            types = gen_parameters(cmd, false, true).join(", "),
            args = gen_parameters(cmd, true, false).join(", "),
            ret = cmd.proto.ty,
        )?;
    }
    writeln!(dest, "}}")
}
