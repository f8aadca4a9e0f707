use crate::constants::*;
use deck_core::{
    Camera, Fog, HoverResolver, Material, PickShape, Prop, PropMesh, Rgb, SceneLayout,
};
use glam::{EulerRot, Mat3, Mat4, Quat, Vec2, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
pub mod mesh;

use mesh::{MeshData, Vertex};

static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
static STARS_WGSL: &str = include_str!("../shaders/stars.wgsl");

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// Shininess sentinel for unlit geometry (see scene.wgsl)
const UNLIT: f32 = -1.0;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    viewport: [f32; 4],
    ambient: [f32; 4],
    point_pos: [f32; 4],
    point_color: [f32; 4],
    dir_light: [f32; 4],
    dir_color: [f32; 4],
    fog_color: [f32; 4],
    fog_params: [f32; 4],
}

impl SceneUniforms {
    /// Lighting and fog terms; camera terms are filled per frame.
    fn from_layout(layout: &SceneLayout) -> Self {
        let l = &layout.lighting;
        let scaled = |c: Rgb, k: f32| [c[0] * k, c[1] * k, c[2] * k, 0.0];
        let (point_pos, point_color) = match l.point {
            Some(p) => (p.position.extend(p.range).to_array(), scaled(p.color, p.intensity)),
            None => ([0.0; 4], [0.0; 4]),
        };
        let (fog_color, fog_params) = match layout.fog {
            Fog::Exp2 { color, density } => {
                ([color[0], color[1], color[2], 1.0], [density, 0.0, 0.0, 0.0])
            }
            Fog::Linear { color, near, far } => {
                ([color[0], color[1], color[2], 2.0], [0.0, near, far, 0.0])
            }
        };
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0; 4],
            viewport: [1.0; 4],
            ambient: scaled(l.ambient, l.ambient_intensity),
            point_pos,
            point_color,
            dir_light: l.directional.position.normalize_or_zero().extend(0.0).to_array(),
            dir_color: scaled(l.directional.color, l.directional.intensity),
            fog_color,
            fog_params,
        }
    }
}

/// Per-instance model and normal matrices plus shading parameters.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceData {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 3],
    color: [f32; 4],
    /// emissive, shininess, bump scale, bump seed
    params: [f32; 4],
}

impl InstanceData {
    fn new(model: Mat4, color: Rgb, alpha: f32, params: [f32; 4]) -> Self {
        let n = Mat3::from_mat4(model).inverse().transpose();
        Self {
            model: model.to_cols_array_2d(),
            normal: [
                n.x_axis.extend(0.0).to_array(),
                n.y_axis.extend(0.0).to_array(),
                n.z_axis.extend(0.0).to_array(),
            ],
            color: [color[0], color[1], color[2], alpha],
            params,
        }
    }

    fn prop(p: &Prop) -> Self {
        let model = Mat4::from_scale_rotation_translation(p.scale, Quat::IDENTITY, p.center);
        Self::new(model, p.color, 1.0, [0.0, 10.0 + 80.0 * p.metalness, 0.0, 0.0])
    }
}

struct GpuMesh {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, data: &MeshData) -> Self {
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertices,
            indices,
            index_count: data.indices.len() as u32,
        }
    }

    fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, instances: std::ops::Range<u32>) {
        if instances.is_empty() {
            return;
        }
        rpass.set_vertex_buffer(0, self.vertices.slice(..));
        rpass.set_index_buffer(self.indices.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.index_count, 0, instances);
    }
}

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 9] = wgpu::vertex_attr_array![
    2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4,
    6 => Float32x4, 7 => Float32x4, 8 => Float32x4,
    9 => Float32x4, 10 => Float32x4,
];
const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const STAR_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x4];

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    uniforms: SceneUniforms,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    opaque_pipeline: wgpu::RenderPipeline,
    translucent_pipeline: wgpu::RenderPipeline,
    star_pipeline: wgpu::RenderPipeline,

    sphere: GpuMesh,
    cube: GpuMesh,
    rings: Vec<GpuMesh>,
    ring_instances: Vec<InstanceData>,
    prop_instances: Vec<(PropMesh, InstanceData)>,
    instance_buffer: wgpu::Buffer,
    star_buffer: Option<wgpu::Buffer>,
    star_count: u32,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, layout: &SceneLayout) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (depth_tex, depth_view) =
            helpers::create_depth_texture(&device, config.width, config.height, DEPTH_FORMAT);

        let uniforms = SceneUniforms::from_layout(layout);
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("scene_uniforms"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bgl = helpers::uniform_bind_group_layout(&device);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let mesh_buffers = [
            // slot 0: mesh vertices
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRIBUTES,
            },
            // slot 1: instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceData>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRIBUTES,
            },
        ];
        let opaque_pipeline = helpers::make_scene_pipeline(
            &device,
            "opaque_pipeline",
            &pipeline_layout,
            &scene_shader,
            ("vs_main", "fs_main"),
            &mesh_buffers,
            format,
            DEPTH_FORMAT,
            None,
            true,
        );
        let translucent_pipeline = helpers::make_scene_pipeline(
            &device,
            "translucent_pipeline",
            &pipeline_layout,
            &scene_shader,
            ("vs_main", "fs_main"),
            &mesh_buffers,
            format,
            DEPTH_FORMAT,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );

        let star_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("star_shader"),
            source: wgpu::ShaderSource::Wgsl(STARS_WGSL.into()),
        });
        let star_pipeline = helpers::make_scene_pipeline(
            &device,
            "star_pipeline",
            &pipeline_layout,
            &star_shader,
            ("vs_star", "fs_star"),
            &[wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 4) as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &STAR_ATTRIBUTES,
            }],
            format,
            DEPTH_FORMAT,
            None,
            true,
        );

        let sphere = GpuMesh::upload(
            &device,
            "sphere",
            &mesh::uv_sphere(SPHERE_SEGMENTS, SPHERE_SEGMENTS / 2),
        );
        let cube = GpuMesh::upload(&device, "cube", &mesh::cube());
        let rings = layout
            .rings
            .iter()
            .map(|r| {
                GpuMesh::upload(
                    &device,
                    "ring",
                    &mesh::annulus(r.inner_radius, r.outer_radius, RING_SEGMENTS),
                )
            })
            .collect();
        let ring_instances = layout
            .rings
            .iter()
            .map(|r| {
                let model = Mat4::from_rotation_translation(r.rotation, r.center);
                InstanceData::new(model, r.color, r.opacity, [0.0, UNLIT, 0.0, 0.0])
            })
            .collect();
        let prop_instances = layout
            .props
            .iter()
            .map(|p| (p.mesh, InstanceData::prop(p)))
            .collect();
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<InstanceData>() * MAX_MESH_INSTANCES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let stars: Vec<[f32; 4]> = layout
            .starfield
            .points
            .iter()
            .map(|p| p.extend(layout.starfield.size).to_array())
            .collect();
        let star_buffer = (!stars.is_empty()).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("star_vb"),
                contents: bytemuck::cast_slice(&stars),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        let [r, g, b] = layout.clear_color;
        let (surface_w, surface_h) = (config.width, config.height);
        log::info!(
            "[gpu] ready {}x{} format={:?} stars={} rings={} props={}",
            width,
            height,
            format,
            stars.len(),
            layout.rings.len(),
            layout.props.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            _depth_tex: depth_tex,
            depth_view,
            uniforms,
            uniform_buffer,
            bind_group,
            opaque_pipeline,
            translucent_pipeline,
            star_pipeline,
            sphere,
            cube,
            rings,
            ring_instances,
            prop_instances,
            instance_buffer,
            star_count: stars.len() as u32,
            star_buffer,
            width: surface_w,
            height: surface_h,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (tex, view) =
                helpers::create_depth_texture(&self.device, width, height, DEPTH_FORMAT);
            self._depth_tex = tex;
            self.depth_view = view;
        }
    }

    /// Draw one frame. `rotations` holds the per-body spin (x, y) in radians,
    /// parallel to `layout.objects`.
    pub fn render(
        &mut self,
        camera: &Camera,
        layout: &SceneLayout,
        rotations: &[Vec2],
        hover: &HoverResolver,
    ) -> Result<(), wgpu::SurfaceError> {
        self.write_camera(camera);

        // Opaque instances grouped by mesh: spheres first, then cubes, then rings.
        let mut spheres = Vec::with_capacity(layout.objects.len() + layout.props.len());
        let mut cubes = Vec::with_capacity(layout.objects.len() + layout.props.len());
        for (i, object) in layout.objects.iter().enumerate() {
            let Some(visual) = layout.visuals.get(i) else {
                continue;
            };
            let spin = rotations.get(i).copied().unwrap_or(Vec2::ZERO);
            let rotation = Quat::from_euler(EulerRot::XYZ, spin.x, spin.y, 0.0);
            let (scale, target) = match object.shape {
                PickShape::Sphere { radius } => (Vec3::splat(radius), &mut spheres),
                PickShape::Box { half_extents } => (half_extents, &mut cubes),
            };
            let model = Mat4::from_scale_rotation_translation(scale, rotation, object.position);
            let (shininess, bump, seed) = match visual.material {
                Material::Phong { shininess } => (shininess, 0.0, 0.0),
                Material::Bumpy {
                    roughness,
                    bump_scale,
                    seed,
                    ..
                } => (4.0 + 40.0 * (1.0 - roughness), bump_scale, (seed % 1000) as f32 / 10.0),
            };
            target.push(InstanceData::new(
                model,
                visual.color,
                1.0,
                [hover.emissive(i), shininess, bump, seed],
            ));
        }
        for (mesh, data) in &self.prop_instances {
            match mesh {
                PropMesh::Sphere => spheres.push(*data),
                PropMesh::Cube => cubes.push(*data),
            }
        }
        let sphere_range = 0..spheres.len() as u32;
        let cube_range = sphere_range.end..sphere_range.end + cubes.len() as u32;
        let ring_start = cube_range.end;

        let mut instances = spheres;
        instances.append(&mut cubes);
        instances.extend_from_slice(&self.ring_instances);
        if instances.len() > MAX_MESH_INSTANCES {
            log::warn!(
                "[gpu] {} instances exceed capacity {}; truncating",
                instances.len(),
                MAX_MESH_INSTANCES
            );
            instances.truncate(MAX_MESH_INSTANCES);
        }
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        let drawn = instances.len() as u32;
        let clamp = |r: std::ops::Range<u32>| r.start.min(drawn)..r.end.min(drawn);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);

            if let Some(stars) = &self.star_buffer {
                rpass.set_pipeline(&self.star_pipeline);
                rpass.set_vertex_buffer(0, stars.slice(..));
                rpass.draw(0..6, 0..self.star_count);
            }

            rpass.set_pipeline(&self.opaque_pipeline);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            self.sphere.draw(&mut rpass, clamp(sphere_range));
            self.cube.draw(&mut rpass, clamp(cube_range));

            rpass.set_pipeline(&self.translucent_pipeline);
            for (i, ring) in self.rings.iter().enumerate() {
                let at = ring_start + i as u32;
                ring.draw(&mut rpass, clamp(at..at + 1));
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn write_camera(&mut self, camera: &Camera) {
        let proj = camera.projection_matrix();
        self.uniforms.view_proj = (proj * camera.view_matrix()).to_cols_array_2d();
        self.uniforms.camera_pos = camera.pose.position.extend(1.0).to_array();
        self.uniforms.viewport = [
            self.width as f32,
            self.height as f32,
            proj.y_axis.y,
            0.0,
        ];
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));
    }
}
