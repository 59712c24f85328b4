/// Vertex shader for the plant mesh; vertices arrive in world space
pub const PLANT_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
layout(location = 2) in vec3 a_color;

uniform mat4 u_view;
uniform mat4 u_projection;

out vec3 v_normal;
out vec3 v_world_position;
out vec3 v_color;

void main() {
    v_world_position = a_position;
    v_normal = a_normal;
    v_color = a_color;
    gl_Position = u_projection * u_view * vec4(a_position, 1.0);
}
"#;

/// Ambient plus one directional light, with a soft sky/ground hemisphere term
pub const PLANT_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

in vec3 v_normal;
in vec3 v_world_position;
in vec3 v_color;

uniform vec3 u_camera_pos;
uniform vec3 u_light_dir;
uniform float u_ambient_strength;

out vec4 fragColor;

void main() {
    vec3 normal = normalize(v_normal);
    vec3 view_dir = normalize(u_camera_pos - v_world_position);
    if (dot(normal, view_dir) < 0.0) {
        normal = -normal;
    }

    vec3 light_dir = normalize(u_light_dir);
    float diffuse = max(dot(normal, light_dir), 0.0);

    vec3 sky = vec3(0.75, 0.85, 1.0);
    vec3 ground = vec3(0.35, 0.25, 0.15);
    vec3 hemisphere = mix(ground, sky, normal.y * 0.5 + 0.5);

    vec3 half_dir = normalize(light_dir + view_dir);
    float specular = pow(max(dot(normal, half_dir), 0.0), 24.0) * 0.15;

    vec3 color = v_color * (hemisphere * u_ambient_strength + diffuse * 0.8) + specular;
    fragColor = vec4(min(color, vec3(1.0)), 1.0);
}
"#;
