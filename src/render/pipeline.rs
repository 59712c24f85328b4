use web_sys::{WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlUniformLocation, WebGlVertexArrayObject};
use crate::math::{Mat4, Vec3};
use crate::mesh::{Mesh, VERTEX_STRIDE};
use super::webgl::WebGLContext;
use super::shaders::*;

/// Fixed perspective camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov: f32,
}

impl Camera {
    /// Framing for the flower, which stays under two units tall
    pub fn flower() -> Self {
        Self {
            position: Vec3::new(3.0, 3.0, 5.0),
            target: Vec3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::FRAC_PI_4,
        }
    }

    /// Pulled back to fit a full-grown canopy
    pub fn tree() -> Self {
        Self {
            position: Vec3::new(6.0, 4.5, 9.0),
            target: Vec3::new(0.0, 2.2, 0.0),
            fov: std::f32::consts::FRAC_PI_4,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, Vec3::UP)
    }

    pub fn projection(&self, width: i32, height: i32) -> Mat4 {
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        Mat4::perspective(self.fov, aspect, 0.1, 100.0)
    }
}

struct PlantUniforms {
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    camera_pos: Option<WebGlUniformLocation>,
    light_dir: Option<WebGlUniformLocation>,
    ambient_strength: Option<WebGlUniformLocation>,
}

/// Draws one world-space mesh per frame with a single lit program
pub struct RenderPipeline {
    ctx: WebGLContext,
    program: WebGlProgram,
    uniforms: PlantUniforms,

    vao: WebGlVertexArrayObject,
    vertex_buffer: WebGlBuffer,
    index_buffer: WebGlBuffer,
    index_count: i32,

    width: i32,
    height: i32,

    pub camera: Camera,
}

impl RenderPipeline {
    pub fn new(gl: WebGl2RenderingContext, width: i32, height: i32, camera: Camera) -> Result<Self, String> {
        let ctx = WebGLContext::new(gl);
        let program = ctx.create_program(PLANT_VERTEX_SHADER, PLANT_FRAGMENT_SHADER)?;

        let uniforms = PlantUniforms {
            view: ctx.get_uniform_location(&program, "u_view"),
            projection: ctx.get_uniform_location(&program, "u_projection"),
            camera_pos: ctx.get_uniform_location(&program, "u_camera_pos"),
            light_dir: ctx.get_uniform_location(&program, "u_light_dir"),
            ambient_strength: ctx.get_uniform_location(&program, "u_ambient_strength"),
        };

        let vao = ctx.create_vao()?;
        let vertex_buffer = ctx.create_buffer()?;
        let index_buffer = ctx.create_buffer()?;

        // Layout: position(3) + normal(3) + color(3)
        ctx.gl.bind_vertex_array(Some(&vao));
        ctx.gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&vertex_buffer));
        ctx.gl.bind_buffer(WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));
        ctx.float_attribute(0, 3, VERTEX_STRIDE, 0);
        ctx.float_attribute(1, 3, VERTEX_STRIDE, 3);
        ctx.float_attribute(2, 3, VERTEX_STRIDE, 6);
        ctx.gl.bind_vertex_array(None);

        Ok(Self {
            ctx,
            program,
            uniforms,
            vao,
            vertex_buffer,
            index_buffer,
            index_count: 0,
            width,
            height,
            camera,
        })
    }

    /// Replace the GPU copy of the scene; called every frame as the plant grows
    pub fn upload_mesh(&mut self, mesh: &Mesh) {
        let gl = &self.ctx.gl;
        gl.bind_vertex_array(Some(&self.vao));
        self.ctx.upload_f32(&self.vertex_buffer, &mesh.vertex_data(), WebGl2RenderingContext::DYNAMIC_DRAW);
        self.ctx.upload_u32(&self.index_buffer, mesh.index_data(), WebGl2RenderingContext::DYNAMIC_DRAW);
        gl.bind_vertex_array(None);
        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, None);

        self.index_count = mesh.index_data().len() as i32;
    }

    pub fn render(&self) {
        let gl = &self.ctx.gl;

        self.ctx.viewport(0, 0, self.width, self.height);
        // Pale sky
        self.ctx.clear(0.88, 0.95, 1.0, 1.0);
        self.ctx.enable_depth_test();

        if self.index_count == 0 {
            return;
        }

        gl.use_program(Some(&self.program));

        let view = self.camera.view();
        let projection = self.camera.projection(self.width, self.height);
        let eye = self.camera.position;

        self.ctx.uniform_matrix4fv(self.uniforms.view.as_ref(), view.as_slice());
        self.ctx.uniform_matrix4fv(self.uniforms.projection.as_ref(), projection.as_slice());
        self.ctx.uniform_3f(self.uniforms.camera_pos.as_ref(), eye.x, eye.y, eye.z);
        self.ctx.uniform_3f(self.uniforms.light_dir.as_ref(), 5.0, 5.0, 5.0);
        self.ctx.uniform_1f(self.uniforms.ambient_strength.as_ref(), 0.5);

        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_elements_with_i32(
            WebGl2RenderingContext::TRIANGLES,
            self.index_count,
            WebGl2RenderingContext::UNSIGNED_INT,
            0,
        );
        gl.bind_vertex_array(None);
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }
}
